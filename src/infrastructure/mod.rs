//! Infrastructure layer: corpus sources and DI container
//!
//! This layer implements the corpus boundary trait and wires up services.

pub mod corpus_file;
pub mod di;
pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
