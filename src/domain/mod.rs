//! Domain layer: terms, edit distance and the BK-tree index
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod distance;
pub mod entities;
pub mod error;
pub mod index;
pub mod render;

pub use arena::{BkNode, BkTree, Candidate, TreeStats};
pub use builder::{IndexBuilder, IndexResult};
pub use distance::{folded_len, CostModel, EditDistance, ScoreMatrix, MAX_COST};
pub use entities::*;
pub use error::DomainError;
pub use index::TermIndex;
pub use render::TreeRender;
