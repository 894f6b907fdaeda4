//! CLI command implementations

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_provider, RemoteRequest};
use crate::nlp::Language;
use crate::rank::Engine;
use crate::summary::Summarizer;

/// Summarize a transcript file with the local extractive pipeline.
pub fn summarize_local(
    settings: &Settings,
    file: &Path,
    language: Option<Language>,
    ratio: Option<f64>,
    engine: Option<Engine>,
    output: Option<PathBuf>,
    destination: Option<PathBuf>,
) -> Result<()> {
    let ratio = resolve_ratio(ratio, settings)?;
    let language = resolve_language(language, settings);
    let engine = match engine {
        Some(engine) => engine.as_str().to_string(),
        None => settings.summary.engine.clone(),
    };

    let transcript = read_transcript(file)?;
    let summarizer = Summarizer::new(language, &engine)?;
    let summary = summarizer.summarize(&transcript, ratio);

    deliver_summary(&summary, file, output, destination)
}

/// Summarize a transcript file through the configured remote provider.
pub async fn summarize_remote(
    settings: &Settings,
    file: &Path,
    language: Option<Language>,
    ratio: Option<f64>,
    api_url: Option<String>,
    output: Option<PathBuf>,
    destination: Option<PathBuf>,
) -> Result<()> {
    let ratio = resolve_ratio(ratio, settings)?;
    let language = resolve_language(language, settings);

    let mut settings = settings.clone();
    if let Some(url) = api_url {
        settings.llm.api_url = url;
    }

    let transcript = read_transcript(file)?;
    let provider = build_provider(&settings)?;
    let summary = provider
        .summarize(RemoteRequest {
            transcript: &transcript,
            language,
            ratio,
        })
        .await?;

    deliver_summary(&summary, file, output, destination)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn resolve_ratio(ratio: Option<f64>, settings: &Settings) -> Result<f64> {
    let ratio = ratio.unwrap_or(settings.summary.ratio);
    if !(0.0..=1.0).contains(&ratio) {
        anyhow::bail!("Summary ratio must be between 0.0 and 1.0");
    }
    Ok(ratio)
}

fn resolve_language(language: Option<Language>, settings: &Settings) -> Language {
    language.unwrap_or_else(|| Language::from_name(&settings.summary.language))
}

fn read_transcript(file: &Path) -> Result<String> {
    std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read transcript file: {}", file.display()))
}

/// Write the summary where the user asked for it. Write failures fall
/// back to printing the summary so it is never lost.
fn deliver_summary(
    summary: &str,
    input: &Path,
    output: Option<PathBuf>,
    destination: Option<PathBuf>,
) -> Result<()> {
    if let Some(dir) = destination {
        match save_to_destination(summary, input, &dir) {
            Ok(path) => println!("Summary written to {}", path.display()),
            Err(e) => {
                eprintln!("Error writing to destination directory: {}", e);
                println!();
                println!("Summary:");
                println!("{}", summary);
            }
        }
    } else if let Some(path) = output {
        match save_to_file(summary, &path) {
            Ok(()) => println!("Summary written to {}", path.display()),
            Err(e) => {
                eprintln!("Error writing to output file: {}", e);
                println!();
                println!("Summary:");
                println!("{}", summary);
            }
        }
    } else {
        println!("{}", summary);
    }

    Ok(())
}

fn save_to_destination(summary: &str, input: &Path, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(dated_file_name(input));
    std::fs::write(&path, summary)?;
    Ok(path)
}

fn save_to_file(summary: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, summary)?;
    Ok(())
}

/// `YYYY_MM_DD_<input stem>.md`, spaces in the stem replaced by
/// underscores.
fn dated_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("summary")
        .replace(' ', "_");
    format!("{}_{}.md", Local::now().format("%Y_%m_%d"), stem)
}
