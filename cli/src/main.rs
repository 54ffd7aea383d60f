//! CLI for the repository metadata resolver.
//!
//! This tool inspects a project's git remotes and prints the derived
//! package-manifest metadata (homepage, repository, bug tracker) as JSON.

use clap::Parser;
use repo_metadata::{resolve_metadata, ConfigError, MetadataConfig, PackageMetadata};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository Metadata Resolver - Derive manifest metadata from a project's git remotes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to start the version-control root search from.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Explicit homepage URL, overriding the derived repository URL.
    #[arg(long)]
    homepage: Option<String>,

    /// Remote name to probe; repeat to set the priority order.
    #[arg(long)]
    remote: Vec<String>,

    /// Include a bug tracker entry pointing at the issue tracker.
    #[arg(long)]
    issues: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            error!(error = %e, "Configuration error");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
///
/// Resolution absence is not a failure: the tool prints `{}` and exits 0
/// when no metadata could be derived. Only configuration errors surface.
async fn run(args: Args) -> Result<(), ConfigError> {
    let config = build_config(&args)?;

    match resolve_metadata(&args.dir, &config).await {
        Some(metadata) => print_metadata(&metadata, args.pretty),
        None => {
            debug!("No repository metadata resolved");
            println!("{{}}");
        }
    }

    Ok(())
}

/// Merges the config file (if any) with command-line overrides.
fn build_config(args: &Args) -> Result<MetadataConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => MetadataConfig::load(path)?,
        None => MetadataConfig::default(),
    };

    if args.homepage.is_some() {
        config.homepage = args.homepage.clone();
    }
    if !args.remote.is_empty() {
        config.remote = args.remote.clone();
    }
    if args.issues {
        config.issues = true;
    }

    Ok(config)
}

/// Prints the resolved metadata as JSON.
fn print_metadata(metadata: &PackageMetadata, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(metadata)
    } else {
        serde_json::to_string(metadata)
    };

    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "Failed to serialize metadata"),
    }
}
