//! Infrastructure-level errors (wraps application errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ApplicationError;

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid corpus file {path}:{line}: {message}")]
    CorpusFormat {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
