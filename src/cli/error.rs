//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::CorpusFormat { .. } => crate::exitcode::DATAERR,
                InfraError::Application(ApplicationError::Config { .. }) => {
                    crate::exitcode::CONFIG
                }
                InfraError::Application(ApplicationError::Domain(_)) => crate::exitcode::DATAERR,
                InfraError::Application(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_empty_corpus_error_when_mapping_then_dataerr() {
        let err = CliError::from(ApplicationError::from(DomainError::EmptyCorpus));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_missing_corpus_when_mapping_then_usage() {
        let err = CliError::Usage("no corpus".into());
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
