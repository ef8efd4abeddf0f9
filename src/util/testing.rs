use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::Term;
use crate::infrastructure::traits::InMemoryCorpusSource;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Gene names shared by tests.
pub const SAMPLE_GENES: &[&str] = &[
    "Actb", "Actg1", "Gapdh", "Cd3e", "Cd4", "Cd8a", "Cd8b1", "Cd19", "Ptprc", "Ms4a1", "Nkg7",
    "Gzma", "Gzmb", "Lyz2", "Cd14", "Fcgr3", "Itgam", "Itgax", "Foxp3", "Il2ra",
];

/// Attribute names shared by tests.
pub const SAMPLE_ATTRIBUTES: &[&str] = &["cluster", "cell_type", "batch", "sample"];

/// FACS channel names shared by tests.
pub const SAMPLE_FACS: &[&str] = &["FSC-A", "SSC-A", "CD4-FITC", "CD8-PE"];

/// Corpus in loader order: genes, then attributes, then FACS.
pub fn sample_corpus() -> Vec<Term> {
    SAMPLE_GENES
        .iter()
        .copied()
        .map(Term::gene)
        .chain(SAMPLE_ATTRIBUTES.iter().copied().map(Term::attribute))
        .chain(SAMPLE_FACS.iter().copied().map(Term::facs))
        .collect()
}

pub fn sample_source() -> InMemoryCorpusSource {
    InMemoryCorpusSource::new(
        SAMPLE_GENES.iter().copied(),
        SAMPLE_ATTRIBUTES.iter().copied(),
        SAMPLE_FACS.iter().copied(),
    )
}
