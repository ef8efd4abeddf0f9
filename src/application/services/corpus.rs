//! Corpus loading
//!
//! Assembles the ordered term list from a [`CorpusSource`]: gene names first,
//! then attributes, then FACS channels. Waiting on the datastore is the only
//! suspension point of the pipeline.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::CorpusConfig;
use crate::domain::{Category, Term};
use crate::infrastructure::traits::CorpusSource;

/// Loads terms from a corpus source, yielding while its query runs.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    poll_interval: Duration,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::from_config(&CorpusConfig::default())
    }
}

impl CorpusLoader {
    /// A zero interval yields to the scheduler instead of sleeping.
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    pub fn from_config(config: &CorpusConfig) -> Self {
        Self::new(Duration::from_millis(config.poll_interval_ms))
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn load(&self, source: &dyn CorpusSource) -> ApplicationResult<Vec<Term>> {
        self.wait_idle(source).await;
        let genes = source.gene_names().await.with_context("query gene names")?;
        self.wait_idle(source).await;

        let attributes = source.attributes();
        let facs = source.facs();

        let mut terms = Vec::with_capacity(genes.len() + attributes.len() + facs.len());
        push_terms(&mut terms, genes, Category::Gene);
        push_terms(&mut terms, attributes, Category::Attribute);
        push_terms(&mut terms, facs, Category::Facs);

        info!("loaded corpus: {} terms", terms.len());
        Ok(terms)
    }

    async fn wait_idle(&self, source: &dyn CorpusSource) {
        let mut polls = 0usize;
        while source.query_running() {
            polls += 1;
            if self.poll_interval.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(self.poll_interval).await;
            }
        }
        if polls > 0 {
            debug!("corpus source busy for {} polls", polls);
        }
    }
}

fn push_terms(terms: &mut Vec<Term>, names: Vec<String>, category: Category) {
    for name in names {
        if name.trim().is_empty() {
            warn!("skipping empty {} name", category);
            continue;
        }
        terms.push(Term::new(name, category));
    }
}
