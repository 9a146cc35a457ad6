//! Display, JSON and trait implementations for Error

use super::types::Error;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;

impl Error {
    /// Human readable rendering for logs
    ///
    /// `<message> | Meta: <meta json> | Stack: [<frames>]`, where the meta
    /// and stack parts only appear when non-empty.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut text = self.message().unwrap_or_default().to_owned();
        if !self.meta.is_empty() {
            text = format!("{text} | Meta: {}", self.meta_text());
        }
        if !self.stack.is_empty() {
            text = format!("{text} | Stack: [{}]", self.stack.join(" "));
        }
        text
    }

    /// Metadata bag as JSON text, `""` if it cannot be encoded
    #[must_use]
    pub fn meta_text(&self) -> String {
        encode_or(&self.meta, String::new())
    }

    /// Minimal JSON object with the keys `meta`, `error` and `stack`
    ///
    /// Each key is present only when the corresponding part is non-empty.
    /// An empty bag is omitted rather than written as `"meta":{}`, so
    /// consumers must treat a missing `meta` as no metadata.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match serde_json::to_value(self) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to encode error as JSON: {e}");
                Value::Object(serde_json::Map::new())
            }
        }
    }

    /// JSON encoding of [`to_json_value`](Self::to_json_value)
    ///
    /// Falls back to the raw message text, or `""` without a cause, if
    /// encoding fails.
    #[must_use]
    pub fn to_json_text(&self) -> String {
        encode_or(self, self.message().unwrap_or_default().to_owned())
    }
}

/// Encode `value` as JSON text, returning `fallback` on failure
pub(crate) fn encode_or<T>(value: &T, fallback: String) -> String
where
    T: Serialize + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("failed to encode error as JSON: {e}");
            fallback
        }
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = usize::from(!self.meta.is_empty())
            + usize::from(self.cause.is_some())
            + usize::from(!self.stack.is_empty());

        let mut map = serializer.serialize_map(Some(len))?;
        if !self.meta.is_empty() {
            map.serialize_entry("meta", &self.meta)?;
        }
        if let Some(message) = self.message() {
            map.serialize_entry("error", message)?;
        }
        if !self.stack.is_empty() {
            map.serialize_entry("stack", &self.stack)?;
        }
        map.end()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_text())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
