mod cli;
mod terminal;

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use eli5_client::{
    clipboard::SystemClipboard,
    provider::HttpTransport,
    state_machine::{RewriteController, UiBindings},
};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Commands},
    terminal::TerminalSurface,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.load_settings()?;
    let transport = Arc::new(HttpTransport::from_settings(&settings));

    match cli.subcommand.clone() {
        Commands::SaveSettings => {
            let path = cli.save_settings(&settings)?;
            tracing::info!(path = %path.display(), "settings saved");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Health => {
            let health = transport
                .health()
                .await
                .context("health check failed")?;
            println!("{}", serde_json::to_string_pretty(&health)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Rewrite { text, copy } => {
            let input = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut buf)
                        .await
                        .context("failed reading stdin")?;
                    buf
                }
            };

            let surface = Arc::new(TerminalSurface::new(&settings.default_label));
            let controller = RewriteController::new(
                UiBindings {
                    surface: surface.clone(),
                    toasts: surface,
                },
                transport,
                Arc::new(SystemClipboard),
                &settings,
            )?;

            match controller.click(&input).await {
                Some(Ok(_)) => {
                    // A failed copy is already logged; the rewrite itself succeeded.
                    if copy && controller.copy_result().is_err() {
                        return Ok(ExitCode::from(2));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                _ => Ok(ExitCode::FAILURE),
            }
        }
    }
}
