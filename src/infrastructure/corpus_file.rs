//! Corpus file reader
//!
//! Format: one term per line, `name<TAB>category`. Blank lines and lines
//! starting with `#` are ignored. A line without a tab is a gene name.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::domain::Category;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::InMemoryCorpusSource;

/// Read a corpus file into an in-memory source.
#[instrument(level = "debug")]
pub async fn read_corpus_file(path: &Path) -> InfraResult<InMemoryCorpusSource> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InfraError::io(format!("read corpus {}", path.display()), e))?;
    parse_corpus(&content, path)
}

/// Parse corpus text. `path` is only used for error messages.
pub fn parse_corpus(content: &str, path: &Path) -> InfraResult<InMemoryCorpusSource> {
    let mut genes = Vec::new();
    let mut attributes = Vec::new();
    let mut facs = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (name, category) = match line.split_once('\t') {
            Some((name, category)) => {
                let category = category
                    .parse::<Category>()
                    .map_err(|e| format_error(path, i + 1, e.to_string()))?;
                (name.trim(), category)
            }
            None => (trimmed, Category::Gene),
        };

        if name.is_empty() {
            return Err(format_error(path, i + 1, "empty name".to_string()));
        }

        match category {
            Category::Gene => genes.push(name.to_string()),
            Category::Attribute => attributes.push(name.to_string()),
            Category::Facs => facs.push(name.to_string()),
            Category::Invalid => {
                return Err(format_error(
                    path,
                    i + 1,
                    "category 'invalid' cannot be indexed".to_string(),
                ))
            }
        }
    }

    debug!(
        "parsed corpus: {} genes, {} attributes, {} facs",
        genes.len(),
        attributes.len(),
        facs.len()
    );
    Ok(InMemoryCorpusSource::new(genes, attributes, facs))
}

fn format_error(path: &Path, line: usize, message: String) -> InfraError {
    InfraError::CorpusFormat {
        path: PathBuf::from(path),
        line,
        message,
    }
}
