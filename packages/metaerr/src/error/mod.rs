//! Structured error type
//!
//! Provides:
//! - The variadic builder and its argument shapes
//! - Best-effort call site capture
//! - Human readable and JSON renderings
//! - Logging through the `log` facade

pub mod arg;
pub mod constructors;
pub mod display;
pub mod logging;
pub mod macros;
mod stack;
pub mod types;

pub use arg::Arg;
pub use types::{Cause, Error, Params, Result, MAX_STACK_DEPTH};
