//! Structured logging of errors
//!
//! Errors are written through the `log` facade; the application decides
//! where records go. [`init`] wires up `env_logger` for binaries that do not
//! bring their own logger.

use super::types::Error;
use log::{error, info};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize `env_logger` once, configured from `RUST_LOG`
///
/// - `RUST_LOG=error` - only errors
/// - `RUST_LOG=metaerr=trace` - include skipped builder arguments
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();

        info!("structured error logging initialized");
    });
}

/// Initialize logging for test environments
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Log an error at error level
///
/// The record text is [`Error::describe`]; the JSON document follows as a
/// `json=` field for machine consumers.
pub fn log_error(err: &Error) {
    error!("{} json={}", err.describe(), err.to_json_text());
}

impl Error {
    /// Log this error with [`log_error`] and pass it through
    #[must_use]
    pub fn log(self) -> Self {
        log_error(&self);
        self
    }
}
