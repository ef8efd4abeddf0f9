//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Fuzzy lookup and suggestions over gene, attribute and FACS names
#[derive(Parser, Debug)]
#[command(name = "bkcomplete")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (layered over the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Corpus file, one "name<TAB>category" per line (overrides corpus.path)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show ranked suggestions for a query
    Suggest {
        /// Partial or misspelled name
        query: String,
        #[command(flatten)]
        search: SearchArgs,
        /// Print edit distances instead of fixed slots
        #[arg(long)]
        scores: bool,
    },

    /// Classify a name by exact (case-insensitive) match
    Lookup {
        /// Name to classify
        name: String,
    },

    /// Read queries from stdin, one per line, and print suggestions
    Interactive {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Show index shape statistics
    Stats,

    /// Print the BK-tree
    Tree,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Per-query overrides of the configured search defaults.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Maximum edit distance
    #[arg(short, long)]
    pub radius: Option<usize>,

    /// Number of suggestion slots
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented template
    Template,
    /// Show config file locations
    Path,
}
