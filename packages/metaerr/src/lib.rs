//! Structured errors for logging and transport
//!
//! An [`Error`] is folded out of a heterogeneous list of arguments:
//! - message fragments, joined with `": "`
//! - wrapped errors, whose message text is prepended
//! - metadata maps, merged last-write-wins
//!
//! [`Error::build_with_trace`] additionally records up to five caller
//! locations. Every error renders to a minimal JSON object with the keys
//! `meta`, `error` and `stack`.
//!
//! ```
//! use metaerr::{err, params};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
//! let e = err!("db failed", io, params! { "table" => "users" });
//!
//! assert_eq!(e.message(), Some("timeout: db failed"));
//! assert_eq!(e.describe(), r#"timeout: db failed | Meta: {"table":"users"}"#);
//! ```

pub mod error;
#[doc(hidden)]
pub mod macros;

pub use error::*;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
