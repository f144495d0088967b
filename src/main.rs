use clap::Parser;
use daysplit::application::{SplitOptions, SplitService};
use daysplit::cli::{format_summary, Cli};
use daysplit::domain::{FallbackPolicy, SourceDocument};
use daysplit::error::SplitError;
use daysplit::infrastructure::{Config, FileSystemStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_level());

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// `RUST_LOG` wins; otherwise verbosity flags pick the level
fn init_logging(level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), SplitError> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.overrides())?;
    debug!(?config, "Resolved configuration");

    // Fail before touching the output root if the source is missing
    let source = SourceDocument::load(&config.source_path)?;

    let options = SplitOptions {
        policy: if cli.strict {
            FallbackPolicy::Strict
        } else {
            FallbackPolicy::Lenient
        },
        extension: config.extension.clone(),
        progress: !cli.quiet,
    };

    let service = SplitService::new(FileSystemStore::new(config.output_root.clone()));
    let report = service.execute(&source, &options)?;

    if !cli.quiet {
        println!("{}", format_summary(&report, &config.output_root));
    }

    Ok(())
}
