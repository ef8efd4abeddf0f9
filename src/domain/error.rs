//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of index or corpus rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("corpus is empty, nothing to index")]
    EmptyCorpus,

    #[error("invalid edit cost: {name} must be between 1 and {max}", max = crate::domain::distance::MAX_COST)]
    InvalidCost { name: &'static str },

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
