//! Macros for building metadata bags

/// Build a [`Params`](crate::Params) bag from `key => value` pairs
///
/// Values are converted with `serde_json::json!`, so any JSON literal or
/// serializable expression works. Later duplicates overwrite earlier ones.
///
/// ```
/// use metaerr::params;
///
/// let meta = params! { "user" => "alice", "retries" => 3, "user" => "bob" };
/// assert_eq!(meta["user"], "bob");
/// assert_eq!(meta.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert(::std::string::String::from($key), $crate::__private::json!($value));
        )+
        params
    }};
}
