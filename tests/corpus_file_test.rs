use std::fs;
use std::path::PathBuf;

use bkcomplete::application::services::{EngineState, IndexOutcome};
use bkcomplete::config::Settings;
use bkcomplete::domain::Category;
use bkcomplete::infrastructure::di::ServiceContainer;
use bkcomplete::infrastructure::InfraError;
use tempfile::TempDir;

const CORPUS: &str = "\
# genes first, then metadata
Gapdh
Cd4\tgene
cluster\tattribute
FSC-A\tfacs

SSC-A\tFACS
";

fn write_corpus(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("corpus.tsv");
    fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn given_corpus_file_when_indexing_then_categories_resolved() {
    let temp = TempDir::new().unwrap();
    let path = write_corpus(&temp, CORPUS);
    let container = ServiceContainer::new(Settings::default());

    let outcome = container.index_file(&path).await.unwrap();

    match outcome {
        IndexOutcome::Built(report) => assert_eq!(report.terms, 5),
        IndexOutcome::Superseded => panic!("unexpected supersede"),
    }
    let mut engine = container.engine.borrow_mut();
    assert_eq!(engine.state(), EngineState::Ready);
    assert_eq!(engine.lookup_exact("gapdh").unwrap(), Category::Gene);
    assert_eq!(engine.lookup_exact("Cluster").unwrap(), Category::Attribute);
    assert_eq!(engine.lookup_exact("ssc-a").unwrap(), Category::Facs);
}

#[tokio::test]
async fn given_missing_file_when_indexing_then_io_error() {
    let temp = TempDir::new().unwrap();
    let container = ServiceContainer::new(Settings::default());

    let result = container.index_file(&temp.path().join("nope.tsv")).await;

    assert!(matches!(result, Err(InfraError::Io { .. })));
    assert_eq!(container.engine.borrow().state(), EngineState::Idle);
}

#[tokio::test]
async fn given_unknown_category_when_indexing_then_format_error_with_line() {
    let temp = TempDir::new().unwrap();
    let path = write_corpus(&temp, "Gapdh\ncd4\tprotein\n");
    let container = ServiceContainer::new(Settings::default());

    let result = container.index_file(&path).await;

    match result {
        Err(InfraError::CorpusFormat { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_comment_only_file_when_indexing_then_empty_corpus() {
    let temp = TempDir::new().unwrap();
    let path = write_corpus(&temp, "# nothing here\n\n");
    let container = ServiceContainer::new(Settings::default());

    let result = container.index_file(&path).await;

    match result {
        Err(InfraError::Application(e)) => assert!(e.is_empty_corpus()),
        other => panic!("expected empty corpus, got {other:?}"),
    }
}
