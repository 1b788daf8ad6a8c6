use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexlistError {
    /// Bad argument value, detected before any file is touched.
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O failure tied to a specific file.
    #[error("I/O error {context} '{}': {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output rendering failure.
    #[error("format error: {0}")]
    Format(String),
}

impl LexlistError {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LexlistError::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LexlistError>;
