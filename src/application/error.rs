//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add engine-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("index not ready: no corpus has been indexed yet")]
    NotReady,

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// True for an empty-corpus rebuild, which leaves the index untouched.
    pub fn is_empty_corpus(&self) -> bool {
        matches!(self, ApplicationError::Domain(DomainError::EmptyCorpus))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
