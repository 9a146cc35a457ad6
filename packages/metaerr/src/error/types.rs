//! Core error types and definitions

use thiserror::Error;

/// Metadata bag attached to an [`Error`]
///
/// Keys are unique; merging overwrites existing keys.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Maximum number of caller frames recorded by [`Error::build_with_trace`]
pub const MAX_STACK_DEPTH: usize = 5;

/// Structured error carrying a joined message, metadata and call sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Error {
    /// Joined message text, absent when no fragment was supplied
    pub(super) cause: Option<Cause>,
    /// Contextual key-value pairs
    pub(super) meta: Params,
    /// `"file:line"` entries, innermost caller first
    pub(super) stack: Vec<String>,
}

/// Underlying error of an [`Error`], holding the joined message text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Cause(pub(super) String);

impl Cause {
    /// Message text of this cause
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
