//! Asynchronous reindex pipeline
//!
//! Ties corpus loading to the engine's ticketed rebuild. The engine is only
//! borrowed between await points, so queries keep being served from the
//! current index while a load is pending.

use std::cell::RefCell;

use tracing::instrument;

use crate::application::services::{AutoCompleteEngine, CorpusLoader, IndexOutcome};
use crate::application::ApplicationResult;
use crate::infrastructure::traits::CorpusSource;

/// Handle a corpus-ready signal: load from `source` and rebuild.
///
/// If another reindex starts before this one finishes loading, this one
/// returns [`IndexOutcome::Superseded`] and leaves the engine untouched.
#[instrument(level = "debug", skip_all)]
pub async fn reindex(
    engine: &RefCell<AutoCompleteEngine>,
    loader: &CorpusLoader,
    source: &dyn CorpusSource,
) -> ApplicationResult<IndexOutcome> {
    let ticket = engine.borrow_mut().begin_indexing();

    let corpus = match loader.load(source).await {
        Ok(corpus) => corpus,
        Err(e) => {
            engine.borrow_mut().abort_indexing(ticket);
            return Err(e);
        }
    };

    engine.borrow_mut().finish_indexing(ticket, corpus)
}
