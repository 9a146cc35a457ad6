//! Macros for error creation

/// Build an [`Error`](crate::Error) from any mix of supported arguments
///
/// Each argument is converted with [`Arg::from`](crate::Arg).
///
/// ```
/// use metaerr::{err, params};
///
/// let inner = err!("inner");
/// let e = err!(inner, "outer", params! { "attempt" => 3 });
/// assert_eq!(e.message(), Some("inner: outer"));
/// ```
#[macro_export]
macro_rules! err {
    () => {
        $crate::Error::build(::std::iter::empty::<$crate::Arg>())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Error::build([$($crate::Arg::from($arg)),+])
    };
}

/// Like [`err!`], additionally recording the caller's stack
#[macro_export]
macro_rules! traced {
    () => {
        $crate::Error::build_with_trace(::std::iter::empty::<$crate::Arg>())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Error::build_with_trace([$($crate::Arg::from($arg)),+])
    };
}

/// Return early with an [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Return early with an [`err!`] unless the condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
