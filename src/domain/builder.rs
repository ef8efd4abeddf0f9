//! Index builder: sizes the score matrix and bulk-loads the BK-tree.

use tracing::{debug, instrument, warn};

use crate::domain::arena::BkTree;
use crate::domain::distance::{folded_len, CostModel, EditDistance};
use crate::domain::entities::Term;
use crate::domain::error::DomainError;
use crate::domain::index::TermIndex;

/// Result type for index operations.
pub type IndexResult<T> = Result<T, DomainError>;

/// Constructs a [`TermIndex`] from a corpus.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    costs: CostModel,
}

impl IndexBuilder {
    pub fn new(costs: CostModel) -> Self {
        Self { costs }
    }

    /// Build a fresh index, inserting terms in enumeration order.
    ///
    /// The first term becomes the root, so the tree shape depends on order
    /// while the set of search results does not.
    #[instrument(level = "debug", skip_all, fields(terms = corpus.len()))]
    pub fn build(&self, corpus: Vec<Term>) -> IndexResult<TermIndex> {
        if corpus.is_empty() {
            return Err(DomainError::EmptyCorpus);
        }
        self.costs.validate()?;
        if !self.costs.is_symmetric() {
            warn!(
                "insert cost {} != delete cost {}: distance is not a metric, search may miss matches",
                self.costs.insert, self.costs.delete
            );
        }

        let longest_term = corpus
            .iter()
            .map(|t| folded_len(&t.value))
            .max()
            .unwrap_or(0);
        debug!("longest term: {} chars", longest_term);

        let mut metric = EditDistance::with_capacity(self.costs, longest_term);
        let mut tree = BkTree::with_capacity(corpus.len());
        for term in corpus {
            tree.insert(term, &mut metric);
        }

        Ok(TermIndex {
            tree,
            metric,
            longest_term,
        })
    }
}
