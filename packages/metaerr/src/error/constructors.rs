//! Error constructors and methods

use super::arg::Arg;
use super::types::{Cause, Error, Params};

impl Error {
    /// Fold a list of arguments into a new error
    ///
    /// Strings are appended to the message, wrapped errors have their
    /// message prepended, and metadata maps are merged in argument order.
    /// Absent and unsupported arguments are skipped. Never fails: with no
    /// usable argument the result [`is_empty`](Self::is_empty).
    #[must_use]
    pub fn build<I>(args: I) -> Self
    where
        I: IntoIterator<Item = Arg>,
    {
        let mut meta = Params::new();
        let mut fragments: Vec<String> = Vec::new();

        for arg in args {
            match arg {
                Arg::Nil => continue,
                Arg::Message(message) => fragments.push(message),
                Arg::Wrap(wrapped) => {
                    if let Some(cause) = wrapped.cause {
                        fragments.insert(0, cause.0);
                    }
                    merge(&mut meta, wrapped.meta);
                }
                Arg::Cause(message) => fragments.insert(0, message),
                Arg::Meta(params) => merge(&mut meta, params),
                Arg::Unsupported => {
                    log::trace!("skipping unsupported error argument");
                }
            }
        }

        let cause = (!fragments.is_empty()).then(|| Cause(fragments.join(": ")));

        Self {
            cause,
            meta,
            stack: Vec::new(),
        }
    }

    /// Same as [`build`](Self::build), additionally recording up to
    /// [`MAX_STACK_DEPTH`](super::MAX_STACK_DEPTH) caller locations
    ///
    /// The first frame is the caller of this function. Frames without
    /// file and line information are left out.
    #[must_use]
    #[inline(never)]
    pub fn build_with_trace<I>(args: I) -> Self
    where
        I: IntoIterator<Item = Arg>,
    {
        let mut error = Self::build(args);
        error.stack = super::stack::capture();
        error
    }

    /// Replace the metadata bag
    pub fn set_meta(&mut self, meta: Params) -> &mut Self {
        self.meta = meta;
        self
    }

    /// Replace the metadata bag, consuming the error
    #[must_use]
    pub fn with_meta(mut self, meta: Params) -> Self {
        self.meta = meta;
        self
    }

    /// True when there is neither a cause nor any metadata
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cause.is_none() && self.meta.is_empty()
    }

    /// The underlying cause, if any
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Joined message text, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.cause.as_ref().map(Cause::as_str)
    }

    /// The metadata bag
    #[must_use]
    pub fn meta(&self) -> &Params {
        &self.meta
    }

    /// Recorded caller locations
    #[must_use]
    pub fn stack(&self) -> &[String] {
        &self.stack
    }
}

fn merge(root: &mut Params, other: Params) {
    for (key, value) in other {
        root.insert(key, value);
    }
}
