//! Context helpers for fallible configuration steps

use super::types::{Error, Result};

/// Prefix errors with a description of what was being attempted.
///
/// The wrapped error is flattened into a `Configuration` message; only its
/// rendered text survives.
pub trait ResultExt<T> {
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the message only on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.with_context(|| message.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::configuration(format!("{}: {}", f(), e.into())))
    }
}
