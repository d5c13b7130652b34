//! leetdocs - Application Entry Point

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leetdocs::{commands, config::Config, state::AppState};

#[derive(Debug, Parser)]
#[command(name = "leetdocs", version, about = "Generate problem pages and progress badges")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write every problem page and the navigation section
    Docs {
        /// Only process the first two problems
        #[arg(long)]
        mock: bool,
    },
    /// Refresh the progress badges in the readme
    Readme,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(config)?;

    match cli.command {
        Command::Docs { mock } => {
            tracing::info!("Generating problem pages...");
            let report = commands::generate_docs(&state, mock).await?;
            tracing::info!(
                "Done: {} pages written, {} problems skipped",
                report.written,
                report.not_found
            );
        }
        Command::Readme => {
            tracing::info!("Updating readme badges...");
            let summary = commands::update_readme(&state).await?;
            tracing::info!("Done: {}/{} solved", summary.solved(), summary.num_total);
        }
    }

    Ok(())
}
