//! Call site capture for traced errors

#[cfg(feature = "full-backtrace")]
use super::types::MAX_STACK_DEPTH;

/// Symbol fragment identifying the traced constructor in a resolved frame
#[cfg(feature = "full-backtrace")]
const ENTRY_MARKER: &str = "Error>::build_with_trace";

/// Record the callers of [`Error::build_with_trace`](super::Error::build_with_trace)
/// as `"file:line"` strings, innermost first.
#[cfg(feature = "full-backtrace")]
#[inline(never)]
pub(super) fn capture() -> Vec<String> {
    let backtrace = backtrace::Backtrace::new();

    let symbols: Vec<&backtrace::BacktraceSymbol> = backtrace
        .frames()
        .iter()
        .flat_map(backtrace::BacktraceFrame::symbols)
        .collect();

    let names: Vec<String> = symbols
        .iter()
        .map(|symbol| symbol.name().map(|n| n.to_string()).unwrap_or_default())
        .collect();

    // innermost entry, so traces built inside an argument iterator start at their own caller
    let start = match names.iter().position(|name| name.contains(ENTRY_MARKER)) {
        Some(entry) => entry + 1,
        None => names
            .iter()
            .position(|name| !is_internal(name))
            .unwrap_or(names.len()),
    };

    symbols
        .iter()
        .skip(start)
        .take(MAX_STACK_DEPTH)
        .filter_map(|symbol| location(symbol))
        .collect()
}

#[cfg(not(feature = "full-backtrace"))]
pub(super) fn capture() -> Vec<String> {
    log::trace!("stack capture disabled, full-backtrace feature is off");
    Vec::new()
}

#[cfg(feature = "full-backtrace")]
fn is_internal(name: &str) -> bool {
    name.starts_with("backtrace::") || name.contains("metaerr::error::")
}

#[cfg(feature = "full-backtrace")]
fn location(symbol: &backtrace::BacktraceSymbol) -> Option<String> {
    let file = symbol.filename()?;
    let line = symbol.lineno()?;
    Some(format!("{}:{line}", file.display()))
}
