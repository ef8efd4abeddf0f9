//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the corpus source boundary trait but are themselves
//! concrete structs, not traits.

mod corpus;
mod engine;
mod indexer;

pub use corpus::CorpusLoader;
pub use engine::{AutoCompleteEngine, EngineState, IndexOutcome, IndexTicket, RebuildReport};
pub use indexer::reindex;
