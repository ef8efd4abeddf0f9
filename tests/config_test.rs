use std::{env, fs};

use bkcomplete::application::ApplicationError;
use bkcomplete::config::Settings;
use bkcomplete::domain::MAX_COST;
use tempfile::TempDir;

#[test]
fn given_explicit_config_when_loading_then_values_override_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bkcomplete.toml");
    fs::write(
        &path,
        r#"
[search]
radius = 1

[costs]
substitute = 2

[corpus]
path = "/data/corpus.tsv"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).unwrap();

    assert_eq!(settings.search.radius, 1);
    assert_eq!(settings.search.max_results, 5);
    assert_eq!(settings.costs.substitute, 2);
    assert_eq!(settings.costs.insert, 1);
    assert_eq!(
        settings.corpus.path.as_deref(),
        Some(std::path::Path::new("/data/corpus.tsv"))
    );
}

#[test]
fn given_missing_explicit_config_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();

    let result = Settings::load(Some(&temp.path().join("missing.toml")));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_zero_cost_in_config_when_loading_then_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bkcomplete.toml");
    fs::write(&path, "[costs]\ninsert = 0\n").unwrap();

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Domain(_))));
}

#[test]
fn given_oversized_cost_in_config_when_loading_then_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bkcomplete.toml");
    fs::write(&path, format!("[costs]\nsubstitute = {}\n", MAX_COST + 1)).unwrap();

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Domain(_))));
}

#[test]
fn given_env_var_when_loading_then_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bkcomplete.toml");
    fs::write(&path, "[corpus]\npoll_interval_ms = 3\n").unwrap();

    env::set_var("BKCOMPLETE_CORPUS__POLL_INTERVAL_MS", "7");
    let result = Settings::load(Some(&path));
    env::remove_var("BKCOMPLETE_CORPUS__POLL_INTERVAL_MS");

    assert_eq!(result.unwrap().corpus.poll_interval_ms, 7);
}
