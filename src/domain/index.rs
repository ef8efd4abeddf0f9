//! A built BK-tree together with the distance calculator sized for it.

use tracing::instrument;

use crate::domain::arena::{BkTree, Candidate, TreeStats};
use crate::domain::distance::EditDistance;

/// Searchable term index. Produced by [`crate::domain::IndexBuilder`].
#[derive(Debug)]
pub struct TermIndex {
    pub(crate) tree: BkTree,
    pub(crate) metric: EditDistance,
    pub(crate) longest_term: usize,
}

impl TermIndex {
    pub fn tree(&self) -> &BkTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Longest term in the corpus, in folded chars.
    pub fn longest_term(&self) -> usize {
        self.longest_term
    }

    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    /// Unordered hits within `radius` of `query`.
    pub fn search(&mut self, query: &str, radius: usize) -> Vec<Candidate<'_>> {
        self.tree.search_within_radius(query, radius, &mut self.metric)
    }

    /// Hits sorted by ascending distance, ties by insertion order.
    #[instrument(level = "debug", skip(self))]
    pub fn ranked(&mut self, query: &str, radius: usize) -> Vec<Candidate<'_>> {
        let mut hits = self.search(query, radius);
        hits.sort_by_key(|c| (c.distance, c.order));
        hits
    }
}
