//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::nlp::Language;
use crate::rank::Engine;

/// recap - Summarize meeting transcripts locally or via LM Studio
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a transcript with the local extractive pipeline
    Summarize {
        /// Path to the transcript file
        file: PathBuf,

        /// Language of the transcript
        #[arg(short, long)]
        language: Option<Language>,

        /// Summary ratio (0.0-1.0)
        #[arg(short, long)]
        ratio: Option<f64>,

        /// Ranking engine
        #[arg(short, long)]
        engine: Option<Engine>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory that receives a date-stamped summary file
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },

    /// Summarize a transcript through an LM Studio chat endpoint
    Remote {
        /// Path to the transcript file
        file: PathBuf,

        /// Language of the summary instructions
        #[arg(short, long)]
        language: Option<Language>,

        /// Summary ratio (0.0-1.0)
        #[arg(short, long)]
        ratio: Option<f64>,

        /// Chat-completion endpoint URL
        #[arg(short = 'u', long)]
        api_url: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory that receives a date-stamped summary file
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
