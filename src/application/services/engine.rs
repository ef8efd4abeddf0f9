//! Autocomplete engine
//!
//! Owns the term index and its lifecycle (`Idle → Indexing → Ready`), and
//! answers exact-category lookups and ranked suggestion queries.

use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::{SearchConfig, Settings};
use crate::domain::{Category, CostModel, IndexBuilder, TermIndex, Term, TreeStats};

/// Lifecycle state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No corpus indexed yet
    Idle,
    /// A reindex is in flight; a previous index, if any, still serves queries
    Indexing,
    /// An index is installed and no reindex is pending
    Ready,
}

/// Handle for one reindex attempt. Only the most recent ticket may install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTicket {
    generation: u64,
}

/// Summary of a successful rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct RebuildReport {
    pub terms: usize,
    pub longest_term: usize,
    pub stats: TreeStats,
}

/// Result of finishing a reindex.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexOutcome {
    Built(RebuildReport),
    /// A newer reindex or rebuild started meanwhile; this corpus was dropped
    Superseded,
}

/// Fuzzy lookup and suggestion engine over a BK-tree.
#[derive(Debug)]
pub struct AutoCompleteEngine {
    search: SearchConfig,
    builder: IndexBuilder,
    state: EngineState,
    index: Option<TermIndex>,
    generation: u64,
}

impl Default for AutoCompleteEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default(), CostModel::default())
    }
}

impl AutoCompleteEngine {
    pub fn new(search: SearchConfig, costs: CostModel) -> Self {
        Self {
            search,
            builder: IndexBuilder::new(costs),
            state: EngineState::Idle,
            index: None,
            generation: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.search.clone(), settings.costs)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// True once any index is installed, even while a reindex is running.
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub fn index(&self) -> Option<&TermIndex> {
        self.index.as_ref()
    }

    pub fn stats(&self) -> Option<TreeStats> {
        self.index.as_ref().map(TermIndex::stats)
    }

    /// Replace the index with one built from `corpus`.
    ///
    /// An empty corpus is rejected and the current index and state are kept.
    /// The new tree is fully built before it replaces the old one.
    #[instrument(level = "debug", skip_all, fields(terms = corpus.len()))]
    pub fn rebuild(&mut self, corpus: Vec<Term>) -> ApplicationResult<RebuildReport> {
        let index = self.builder.build(corpus)?;
        self.generation += 1;
        Ok(self.install(index))
    }

    /// Start a reindex. Any reindex started earlier is superseded.
    pub fn begin_indexing(&mut self) -> IndexTicket {
        self.generation += 1;
        self.state = EngineState::Indexing;
        debug!("begin indexing: generation {}", self.generation);
        IndexTicket {
            generation: self.generation,
        }
    }

    /// Install the corpus loaded for `ticket`, unless a newer reindex exists.
    #[instrument(level = "debug", skip(self, corpus), fields(terms = corpus.len()))]
    pub fn finish_indexing(
        &mut self,
        ticket: IndexTicket,
        corpus: Vec<Term>,
    ) -> ApplicationResult<IndexOutcome> {
        if ticket.generation != self.generation {
            info!(
                "discarding corpus for generation {}, current is {}",
                ticket.generation, self.generation
            );
            return Ok(IndexOutcome::Superseded);
        }
        match self.builder.build(corpus) {
            Ok(index) => Ok(IndexOutcome::Built(self.install(index))),
            Err(e) => {
                self.settle();
                Err(e.into())
            }
        }
    }

    /// Give up on `ticket` after a failed load. Stale tickets are ignored.
    pub fn abort_indexing(&mut self, ticket: IndexTicket) {
        if ticket.generation == self.generation {
            debug!("abort indexing: generation {}", ticket.generation);
            self.settle();
        }
    }

    /// Category of an exact (case-insensitive) match, or `Invalid`.
    ///
    /// With duplicate names the earliest inserted term wins.
    #[instrument(level = "debug", skip(self))]
    pub fn lookup_exact(&mut self, name: &str) -> ApplicationResult<Category> {
        let index = self.index.as_mut().ok_or(ApplicationError::NotReady)?;
        let category = index
            .ranked(name, 0)
            .first()
            .map(|c| c.term.category)
            .unwrap_or(Category::Invalid);
        Ok(category)
    }

    /// Exactly `max_results` suggestions for `query`, nearest first.
    ///
    /// Unused slots hold [`Term::placeholder`]. An empty query, or a query
    /// before the first index is built, yields only placeholders.
    #[instrument(level = "debug", skip(self))]
    pub fn suggestions_for(&mut self, query: &str, max_results: usize, radius: usize) -> Vec<Term> {
        if query.is_empty() {
            return placeholders(max_results);
        }
        let Some(index) = self.index.as_mut() else {
            debug!("suggestions requested before index is ready");
            return placeholders(max_results);
        };

        index
            .ranked(query, radius)
            .into_iter()
            .take(max_results)
            .map(|c| c.term.clone())
            .pad_using(max_results, |_| Term::placeholder())
            .collect()
    }

    /// [`Self::suggestions_for`] with the configured slot count and radius.
    pub fn suggest(&mut self, query: &str) -> Vec<Term> {
        let (max_results, radius) = (self.search.max_results, self.search.radius);
        self.suggestions_for(query, max_results, radius)
    }

    /// All matches within `radius` with their distances, nearest first.
    pub fn ranked(&mut self, query: &str, radius: usize) -> ApplicationResult<Vec<(usize, Term)>> {
        let index = self.index.as_mut().ok_or(ApplicationError::NotReady)?;
        Ok(index
            .ranked(query, radius)
            .into_iter()
            .map(|c| (c.distance, c.term.clone()))
            .collect())
    }

    fn install(&mut self, index: TermIndex) -> RebuildReport {
        let report = RebuildReport {
            terms: index.len(),
            longest_term: index.longest_term(),
            stats: index.stats(),
        };
        self.index = Some(index);
        self.state = EngineState::Ready;
        info!("index ready: {} terms, {}", report.terms, report.stats);
        report
    }

    fn settle(&mut self) {
        self.state = if self.index.is_some() {
            EngineState::Ready
        } else {
            EngineState::Idle
        };
    }
}

fn placeholders(n: usize) -> Vec<Term> {
    vec![Term::placeholder(); n]
}
