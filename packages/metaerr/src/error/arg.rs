//! Argument shapes accepted by the builder

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use super::types::{Error, Params};

/// One builder argument
///
/// Every supported shape has a `From` conversion, so the [`err!`](crate::err)
/// and [`traced!`](crate::traced) macros accept values directly. Shapes the
/// builder does not understand convert to [`Arg::Unsupported`] and are
/// skipped.
#[derive(Debug)]
pub enum Arg {
    /// Absent value, skipped
    Nil,
    /// Message fragment, appended
    Message(String),
    /// Structured error: message prepended, metadata merged
    Wrap(Error),
    /// Generic error: message text prepended
    Cause(String),
    /// Metadata merged into the bag
    Meta(Params),
    /// Unknown shape, skipped
    Unsupported,
}

impl Arg {
    /// Wrap any standard error as a generic cause
    pub fn cause<E>(error: E) -> Self
    where
        E: std::error::Error,
    {
        Self::Cause(error.to_string())
    }
}

impl From<&str> for Arg {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<String> for Arg {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&String> for Arg {
    fn from(message: &String) -> Self {
        Self::Message(message.clone())
    }
}

impl From<Cow<'_, str>> for Arg {
    fn from(message: Cow<'_, str>) -> Self {
        Self::Message(message.into_owned())
    }
}

impl From<Error> for Arg {
    fn from(error: Error) -> Self {
        Self::Wrap(error)
    }
}

impl From<&Error> for Arg {
    fn from(error: &Error) -> Self {
        Self::Wrap(error.clone())
    }
}

impl From<Params> for Arg {
    fn from(meta: Params) -> Self {
        Self::Meta(meta)
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for Arg {
    fn from(meta: HashMap<String, V>) -> Self {
        Self::Meta(meta.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Arg {
    fn from(meta: BTreeMap<String, V>) -> Self {
        Self::Meta(meta.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::String(message) => Self::Message(message),
            Value::Object(meta) => Self::Meta(meta),
            Value::Bool(_) | Value::Number(_) | Value::Array(_) => Self::Unsupported,
        }
    }
}

impl From<std::io::Error> for Arg {
    fn from(error: std::io::Error) -> Self {
        Self::cause(error)
    }
}

impl From<serde_json::Error> for Arg {
    fn from(error: serde_json::Error) -> Self {
        Self::cause(error)
    }
}

impl From<std::fmt::Error> for Arg {
    fn from(error: std::fmt::Error) -> Self {
        Self::cause(error)
    }
}

impl From<anyhow::Error> for Arg {
    fn from(error: anyhow::Error) -> Self {
        Self::Cause(error.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Arg {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Cause(error.to_string())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl From<()> for Arg {
    fn from((): ()) -> Self {
        Self::Unsupported
    }
}

macro_rules! unsupported_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(_: $ty) -> Self {
                    Self::Unsupported
                }
            }
        )*
    };
}

unsupported_primitives!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
