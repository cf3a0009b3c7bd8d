use anyhow::Context as _;
use clap::{Parser, Subcommand};
use libmcr::{Context, RegistryClient};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod format;

use format::OutputFormat;

/// mcr - Container Registry Reader
///
/// A CLI tool for browsing repositories, tags and manifests of an
/// anonymously readable container registry.
#[derive(Parser, Debug)]
#[command(name = "mcr")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a YAML configuration file
    #[arg(long, global = true, env = "MCR_CONFIG")]
    config: Option<PathBuf>,

    /// Registry API root (e.g. https://mcr.microsoft.com/v2)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// List repositories in the registry
    #[command(visible_alias = "ls")]
    Repos {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List tags for a repository
    Tags {
        /// Repository name (e.g. dotnet/runtime)
        repository: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Fetch the raw manifest for a repository and reference
    Manifest {
        /// Repository name (e.g. dotnet/runtime)
        repository: String,
        /// Tag or digest
        reference: String,
        /// Write the manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(context::log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Version = cli.command {
        commands::version::print_version();
        return Ok(());
    }

    let app = context::AppContext::build(cli.config.as_deref(), cli.endpoint, cli.timeout)?;
    let endpoint = app.config.endpoint()?;
    debug!(%endpoint, timeout = app.config.network.timeout, "resolved configuration");

    let http = app.config.transport_config().build()?;
    let client = RegistryClient::new(&http).with_endpoint(endpoint);

    // Ctrl-C cancels whatever request is in flight.
    let ctx = Context::background();
    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Version => Ok(()),
        Commands::Repos { format } => {
            commands::image::handle_repos(&client, &ctx, format, &mut stdout).await
        }
        Commands::Tags { repository, format } => {
            commands::image::handle_tags(&client, &ctx, &repository, format, &mut stdout).await
        }
        Commands::Manifest {
            repository,
            reference,
            output,
        } => match output {
            Some(path) => {
                let mut file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                commands::image::handle_manifest(
                    &client,
                    &ctx,
                    &repository,
                    &reference,
                    &mut file,
                    &mut io::stderr(),
                )
                .await
            }
            None => {
                commands::image::handle_manifest(
                    &client,
                    &ctx,
                    &repository,
                    &reference,
                    &mut stdout,
                    &mut io::stderr(),
                )
                .await
            }
        },
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
