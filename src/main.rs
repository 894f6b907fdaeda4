//! recap - Meeting transcript summarizer
//!
//! Entry point for the recap CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recap::cli::{Cli, Commands};
use recap::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            recap::cli::completions::write_script(shell, &mut std::io::stdout());
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Summarize {
                    file,
                    language,
                    ratio,
                    engine,
                    output,
                    destination,
                } => {
                    recap::cli::commands::summarize_local(
                        &settings,
                        &file,
                        language,
                        ratio,
                        engine,
                        output,
                        destination,
                    )?;
                }
                Commands::Remote {
                    file,
                    language,
                    ratio,
                    api_url,
                    output,
                    destination,
                } => {
                    recap::cli::commands::summarize_remote(
                        &settings,
                        &file,
                        language,
                        ratio,
                        api_url,
                        output,
                        destination,
                    )
                    .await?;
                }
                Commands::Config(config_cmd) => {
                    recap::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
