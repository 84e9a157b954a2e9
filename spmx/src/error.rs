//! Error types for file-backed matrix operations

use std::path::PathBuf;

use spmx_core::{FormatError, SpmxError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Source unreadable or destination unwritable
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source read in full but not a well-formed encoded matrix
    #[error("invalid matrix file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Dimension mismatch, overflow or unknown operation
    #[error(transparent)]
    Matrix(#[from] SpmxError),

    #[error("configuration error: {0}")]
    Config(String),

    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use spmx_core::DimensionMismatch;

    #[test]
    fn test_error_display() {
        let err = Error::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "i/o error on missing.txt: no such file");

        let err = Error::Format {
            path: PathBuf::from("a.txt"),
            source: FormatError::MissingRows,
        };
        assert_eq!(
            err.to_string(),
            "invalid matrix file a.txt: missing rows declaration (line 1)"
        );

        let err = Error::from(SpmxError::DimensionMismatch(DimensionMismatch {
            operation: "multiplication",
            left: (2, 3),
            right: (2, 3),
        }));
        assert!(err.to_string().contains("do not match for multiplication"));

        let err = Error::Config("bad value".to_string());
        assert!(err.to_string().contains("configuration error"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("json error: "));
    }
}
