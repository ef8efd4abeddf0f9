use bkcomplete::cli::args::Cli;
use bkcomplete::cli::commands::execute_command;
use bkcomplete::cli::output;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_search_flags_when_parsing_then_overrides_set() {
        let cli = Cli::parse_from([
            "bkcomplete", "-dd", "--corpus", "c.tsv", "suggest", "cd4", "-r", "1", "-n", "3",
        ]);
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(bkcomplete::cli::Commands::Suggest { query, search, scores }) => {
                assert_eq!(query, "cd4");
                assert_eq!(search.radius, Some(1));
                assert_eq!(search.max_results, Some(3));
                assert!(!scores);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
