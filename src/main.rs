//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use cfb_data::{
    cli::{CfbData, Commands},
    commands::{attach_ids::handle_attach_ids, get::handle_get},
    Config,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries CSV.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = CfbData::parse();
    let config = Config::from_env();

    match app.command {
        Commands::Get {
            dataset,
            years,
            output,
        } => {
            handle_get(
                &config,
                dataset.into(),
                years.selection(),
                output.refresh,
                output.output.as_deref(),
            )
            .await?
        }

        Commands::AttachIds { years, output } => {
            handle_attach_ids(
                &config,
                years.selection(),
                output.refresh,
                output.output.as_deref(),
            )
            .await?
        }
    }

    Ok(())
}
