//! Service container for dependency injection
//!
//! Wires the engine, the corpus loader and settings together.

use std::cell::RefCell;
use std::path::Path;
use std::sync::Arc;

use tracing::instrument;

use crate::application::services::{reindex, AutoCompleteEngine, CorpusLoader, IndexOutcome};
use crate::config::Settings;
use crate::infrastructure::corpus_file::read_corpus_file;
use crate::infrastructure::error::InfraResult;
use crate::infrastructure::traits::CorpusSource;

/// Container holding the application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Suggestion engine, borrowed per call
    pub engine: RefCell<AutoCompleteEngine>,

    /// Corpus loader configured from settings
    pub loader: CorpusLoader,
}

impl ServiceContainer {
    pub fn new(settings: Settings) -> Self {
        let engine = AutoCompleteEngine::from_settings(&settings);
        let loader = CorpusLoader::from_config(&settings.corpus);
        Self {
            settings: Arc::new(settings),
            engine: RefCell::new(engine),
            loader,
        }
    }

    /// Reindex from any corpus source.
    pub async fn index_source(&self, source: &dyn CorpusSource) -> InfraResult<IndexOutcome> {
        Ok(reindex(&self.engine, &self.loader, source).await?)
    }

    /// Read a corpus file and reindex from it.
    #[instrument(level = "debug", skip(self))]
    pub async fn index_file(&self, path: &Path) -> InfraResult<IndexOutcome> {
        let source = read_corpus_file(path).await?;
        self.index_source(&source).await
    }
}
