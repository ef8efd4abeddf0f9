//! Fuzzy term lookup over a BK-tree.
//!
//! A corpus of gene, attribute and FACS names is indexed by Levenshtein
//! distance so that a partially typed or misspelled name can be turned into a
//! short, ranked suggestion list, or classified by exact match.
//!
//! Layers, leaves first:
//! - [`domain`]: terms, edit distance, the BK-tree and its builder
//! - [`application`]: the autocomplete engine, corpus loading, reindexing
//! - [`infrastructure`]: corpus sources and service wiring
//! - [`cli`]: the `bkcomplete` command line front end

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
