//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bkcomplete/bkcomplete.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `BKCOMPLETE_*` prefix, `__` between section and key
//!    (e.g. `BKCOMPLETE_SEARCH__RADIUS=3`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::CostModel;

/// Suggestion query defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum edit distance for a suggestion
    pub radius: usize,
    /// Number of suggestion slots handed to the consumer
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            max_results: 5,
        }
    }
}

/// Corpus source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Corpus file (`name<TAB>category` per line)
    pub path: Option<PathBuf>,
    /// Delay between polls while the source is busy; 0 yields instead
    pub poll_interval_ms: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            poll_interval_ms: 16,
        }
    }
}

/// Unified configuration for bkcomplete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub search: SearchConfig,
    pub costs: CostModel,
    pub corpus: CorpusConfig,
}

/// Get the XDG config directory for bkcomplete.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bkcomplete").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bkcomplete.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; must exist when given
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(expand_path(path)).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("BKCOMPLETE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths();
        settings.validate()?;

        Ok(settings)
    }

    /// Parse settings from TOML text on top of compiled defaults.
    pub fn from_toml(content: &str) -> Result<Self, ApplicationError> {
        let mut settings: Self = toml::from_str(content).map_err(|e| ApplicationError::Config {
            message: format!("parse: {e}"),
        })?;
        settings.expand_paths();
        settings.validate()?;
        Ok(settings)
    }

    fn expand_paths(&mut self) {
        if let Some(path) = &self.corpus.path {
            self.corpus.path = Some(expand_path(path));
        }
    }

    /// Reject settings the engine cannot work with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.costs.validate()?;
        if self.search.max_results == 0 {
            return Err(ApplicationError::Config {
                message: "search.max_results must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bkcomplete configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/bkcomplete/bkcomplete.toml
#   Explicit: --config <file>
#   Env:      BKCOMPLETE_<SECTION>__<KEY>, e.g. BKCOMPLETE_SEARCH__RADIUS=3

[search]
# Maximum edit distance for suggestions
# radius = 2
# Number of suggestion slots
# max_results = 5

[costs]
# Edit costs; keep insert == delete so distance stays symmetric
# insert = 1
# delete = 1
# substitute = 1

[corpus]
# Corpus file, one "name<TAB>category" per line (gene, attribute, facs)
# path = "~/data/corpus.tsv"
# Poll interval while the corpus source is busy (0 = yield)
# poll_interval_ms = 16
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_matches_engine_constants() {
        let settings = Settings::default();
        assert_eq!(settings.search.radius, 2);
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.costs, CostModel::default());
        assert!(settings.corpus.path.is_none());
    }

    #[test]
    fn given_partial_toml_when_parsing_then_fills_defaults() {
        let settings = Settings::from_toml("[search]\nradius = 3\n").unwrap();

        assert_eq!(settings.search.radius, 3);
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.costs.substitute, 1);
    }

    #[test]
    fn given_zero_max_results_when_validating_then_errors() {
        let err = Settings::from_toml("[search]\nmax_results = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn given_tilde_in_corpus_path_when_expanding_then_uses_home() {
        let settings = Settings::from_toml("[corpus]\npath = \"~/corpus.tsv\"\n").unwrap();

        let home = std::env::var("HOME").expect("HOME should be set");
        let path = settings.corpus.path.unwrap();
        assert!(path.starts_with(&home), "path should expand ~: {}", path.display());
    }

    #[test]
    fn given_template_when_parsing_then_yields_defaults() {
        let settings = Settings::from_toml(&Settings::template()).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
