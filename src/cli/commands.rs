//! Command dispatch

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::IndexOutcome;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands, SearchArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::TreeRender;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, run with --help for usage".to_string(),
        ));
    };

    match command {
        Commands::Config { command } => config_command(cli, command),
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
        Commands::Suggest {
            query,
            search,
            scores,
        } => with_index(cli, |c| suggest(c, query, search, *scores)),
        Commands::Lookup { name } => with_index(cli, |c| lookup(c, name)),
        Commands::Interactive { search } => with_index(cli, |c| interactive(c, search)),
        Commands::Stats => with_index(cli, stats),
        Commands::Tree => with_index(cli, tree),
    }
}

/// Load settings, index the corpus, then run `f` against the ready engine.
fn with_index<F>(cli: &Cli, f: F) -> CliResult<()>
where
    F: FnOnce(&ServiceContainer) -> CliResult<()>,
{
    let settings = Settings::load(cli.config.as_deref())?;
    let path = corpus_path(cli, &settings)?;
    let container = ServiceContainer::new(settings);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| InfraError::io("start async runtime", e))?;
    let outcome = runtime.block_on(container.index_file(&path))?;

    match outcome {
        IndexOutcome::Built(report) => debug!(
            "indexed {} terms from {}: {}",
            report.terms,
            path.display(),
            report.stats
        ),
        IndexOutcome::Superseded => output::warning("corpus load was superseded"),
    }

    f(&container)
}

fn corpus_path(cli: &Cli, settings: &Settings) -> CliResult<PathBuf> {
    cli.corpus
        .clone()
        .or_else(|| settings.corpus.path.clone())
        .ok_or_else(|| {
            CliError::Usage(
                "no corpus file: pass --corpus or set corpus.path in the config".to_string(),
            )
        })
}

fn resolve_search(container: &ServiceContainer, args: &SearchArgs) -> CliResult<(usize, usize)> {
    let engine = container.engine.borrow();
    let defaults = engine.search_config();
    let max_results = args.max_results.unwrap_or(defaults.max_results);
    if max_results == 0 {
        return Err(CliError::InvalidArgs(
            "--max-results must be at least 1".to_string(),
        ));
    }
    Ok((max_results, args.radius.unwrap_or(defaults.radius)))
}

#[instrument(skip(container))]
fn suggest(
    container: &ServiceContainer,
    query: &str,
    search: &SearchArgs,
    scores: bool,
) -> CliResult<()> {
    let (max_results, radius) = resolve_search(container, search)?;
    let mut engine = container.engine.borrow_mut();

    if scores {
        for (distance, term) in engine.ranked(query, radius)?.iter().take(max_results) {
            output::scored(*distance, term);
        }
        return Ok(());
    }

    for (i, term) in engine.suggestions_for(query, max_results, radius).iter().enumerate() {
        output::slot(i + 1, term);
    }
    Ok(())
}

#[instrument(skip(container))]
fn lookup(container: &ServiceContainer, name: &str) -> CliResult<()> {
    let category = container.engine.borrow_mut().lookup_exact(name)?;
    output::category(name, category);
    Ok(())
}

fn interactive(container: &ServiceContainer, search: &SearchArgs) -> CliResult<()> {
    let (max_results, radius) = resolve_search(container, search)?;
    let mut engine = container.engine.borrow_mut();

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| InfraError::io("read stdin", e))?;
        let query = line.trim();
        output::header(&format!("> {query}"));
        for (i, term) in engine.suggestions_for(query, max_results, radius).iter().enumerate() {
            output::slot(i + 1, term);
        }
    }
    Ok(())
}

fn stats(container: &ServiceContainer) -> CliResult<()> {
    let engine = container.engine.borrow();
    let index = engine
        .index()
        .ok_or(ApplicationError::NotReady)?;
    let stats = index.stats();

    output::header("Index");
    output::detail(&format!("terms:            {}", index.len()));
    output::detail(&format!("longest term:     {}", index.longest_term()));
    output::detail(&format!("depth:            {}", stats.depth));
    output::detail(&format!("leaves:           {}", stats.leaves));
    output::detail(&format!("max children:     {}", stats.max_children));
    output::detail(&format!("avg children:     {:.2}", stats.average_children));
    Ok(())
}

fn tree(container: &ServiceContainer) -> CliResult<()> {
    let engine = container.engine.borrow();
    let index = engine
        .index()
        .ok_or(ApplicationError::NotReady)?;
    output::info(&index.tree().to_tree_string());
    Ok(())
}

fn config_command(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            output::header("Config files");
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::detail("global: (no config directory on this platform)"),
            }
            if let Some(path) = &cli.config {
                output::detail(&format!("explicit: {}", path.display()));
            }
        }
    }
    Ok(())
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
