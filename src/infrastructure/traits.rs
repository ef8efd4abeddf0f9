//! I/O boundary traits for testability
//!
//! The corpus comes from an external datastore. These traits abstract it so
//! the loader can be driven by a real source or an in-memory fixture.

use std::cell::Cell;
use std::io;

use async_trait::async_trait;

/// Supplier of raw names to index.
///
/// Mirrors a datastore that runs one query at a time: callers poll
/// `query_running` and only issue `gene_names` once it reports idle.
#[async_trait(?Send)]
pub trait CorpusSource {
    /// Whether a datastore query is still in progress.
    fn query_running(&self) -> bool;

    /// Query all gene names, in datastore order.
    async fn gene_names(&self) -> io::Result<Vec<String>>;

    /// Attribute names, in display order.
    fn attributes(&self) -> Vec<String>;

    /// FACS channel names, in display order.
    fn facs(&self) -> Vec<String>;
}

/// Corpus source backed by fixed lists.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCorpusSource {
    genes: Vec<String>,
    attributes: Vec<String>,
    facs: Vec<String>,
    busy_polls: Cell<usize>,
    fail_with: Option<String>,
}

impl InMemoryCorpusSource {
    pub fn new<G, A, F>(genes: G, attributes: A, facs: F) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            genes: genes.into_iter().map(Into::into).collect(),
            attributes: attributes.into_iter().map(Into::into).collect(),
            facs: facs.into_iter().map(Into::into).collect(),
            busy_polls: Cell::new(0),
            fail_with: None,
        }
    }

    /// Report a running query for the next `polls` calls to `query_running`.
    pub fn with_busy_polls(self, polls: usize) -> Self {
        self.busy_polls.set(polls);
        self
    }

    /// Make `gene_names` fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Remaining polls that will still report a running query.
    pub fn remaining_busy_polls(&self) -> usize {
        self.busy_polls.get()
    }
}

#[async_trait(?Send)]
impl CorpusSource for InMemoryCorpusSource {
    fn query_running(&self) -> bool {
        let remaining = self.busy_polls.get();
        if remaining == 0 {
            return false;
        }
        self.busy_polls.set(remaining - 1);
        true
    }

    async fn gene_names(&self) -> io::Result<Vec<String>> {
        match &self.fail_with {
            Some(message) => Err(io::Error::new(io::ErrorKind::Other, message.clone())),
            None => Ok(self.genes.clone()),
        }
    }

    fn attributes(&self) -> Vec<String> {
        self.attributes.clone()
    }

    fn facs(&self) -> Vec<String> {
        self.facs.clone()
    }
}
