//! CLI entrypoint for the circleci orb client
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use circleci_application::{ListOrbsUseCase, ValidateOrbError, ValidateOrbUseCase};
use circleci_infrastructure::{ConfigLoader, FileConfig, GraphqlHttpTransport, LocalDocumentLoader};
use circleci_presentation::{Cli, Command, ConsoleFormatter, OrbCommand, RequestSpinner};
use clap::Parser;
use futures::StreamExt;
use std::path::Path;
use std::pin::pin;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a failed command to stderr.
///
/// An invalid orb prints the server's aggregated messages untouched;
/// everything else prints the error description.
fn report(error: &anyhow::Error) {
    match error.downcast_ref::<ValidateOrbError>() {
        Some(ValidateOrbError::Invalid(failure)) => {
            eprintln!("Error: {}", ConsoleFormatter::format_failure(failure));
        }
        _ => {
            eprintln!("Error: {error}");
            debug!("{error:?}");
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    let Some(Command::Orb(orb)) = cli.command else {
        bail!("No command given. Run `circleci --help` for usage.");
    };

    // === Dependency Injection ===
    let transport = Arc::new(
        GraphqlHttpTransport::from_config(&config)
            .map_err(|e| anyhow!("Failed to create GraphQL transport: {e}"))?,
    );
    let endpoint = config.api.endpoint.as_str();
    let show_progress = !cli.quiet;

    info!("Using endpoint {}", endpoint);

    match orb.command {
        OrbCommand::List => list_orbs(transport, endpoint, show_progress).await,
        OrbCommand::Validate(args) => {
            validate_orb(transport, endpoint, &args.path, show_progress).await
        }
        OrbCommand::Expand(args) => expand_orb(transport, endpoint, &args.path, show_progress).await,
    }
}

/// Resolve configuration: files and environment, then command-line overrides.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    if let Some(endpoint) = &cli.endpoint {
        config.api.endpoint = endpoint.clone();
    }
    if let Some(token) = &cli.token {
        config.api.token = Some(token.clone());
    }

    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {e}"))?;
    Ok(config)
}

async fn list_orbs(
    transport: Arc<GraphqlHttpTransport>,
    endpoint: &str,
    show_progress: bool,
) -> Result<()> {
    let use_case = ListOrbsUseCase::new(transport, endpoint);
    let spinner = RequestSpinner::new("Fetching orbs...", show_progress);

    // Names are printed as they arrive; on failure the ones already
    // printed stay printed.
    let mut orbs = pin!(use_case.execute());
    while let Some(orb) = orbs.next().await {
        spinner.println(&ConsoleFormatter::format_orb(&orb?));
    }

    spinner.finish();
    Ok(())
}

async fn validate_orb(
    transport: Arc<GraphqlHttpTransport>,
    endpoint: &str,
    path: &Path,
    show_progress: bool,
) -> Result<()> {
    let document = LocalDocumentLoader::new().load(path)?;
    let use_case = ValidateOrbUseCase::new(transport, endpoint);

    let spinner = RequestSpinner::new(format!("Validating {}", path.display()), show_progress);
    let result = use_case.validate(&document).await;
    spinner.finish();

    result?;
    println!("{}", ConsoleFormatter::format_valid(path));
    Ok(())
}

async fn expand_orb(
    transport: Arc<GraphqlHttpTransport>,
    endpoint: &str,
    path: &Path,
    show_progress: bool,
) -> Result<()> {
    let document = LocalDocumentLoader::new().load(path)?;
    let use_case = ValidateOrbUseCase::new(transport, endpoint);

    let spinner = RequestSpinner::new(format!("Expanding {}", path.display()), show_progress);
    let expanded = use_case.expand(&document).await;
    spinner.finish();

    println!("{}", ConsoleFormatter::format_expanded(&expanded?));
    Ok(())
}
