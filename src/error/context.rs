//! Error context utilities for symgraph
//!
//! Helpers for attaching context to foreign errors while propagating with `?`.

use crate::error::{Result, SymgraphError};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Attach the source file the error occurred on
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| SymgraphError::Analysis {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let kind = (&err as &dyn std::error::Error)
                .downcast_ref::<std::io::Error>()
                .map(|io_err| io_err.kind())
                .unwrap_or(std::io::ErrorKind::Other);

            SymgraphError::SourceRead {
                path: path.as_ref().to_path_buf(),
                source: std::io::Error::new(kind, err.to_string()),
            }
        })
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SymgraphError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SymgraphError,
    {
        self.ok_or_else(err_fn)
    }
}
