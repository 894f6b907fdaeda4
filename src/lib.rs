//! recap - A lightweight CLI tool for summarizing meeting transcripts
//!
//! Summaries are produced either locally (extractive sentence ranking)
//! or by an LM Studio-compatible chat-completion endpoint.

pub mod cli;
pub mod config;
pub mod llm;
pub mod nlp;
pub mod rank;
pub mod summary;
pub mod transcript;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not connect to API at {0}. Is the server running?")]
    ApiConnection(String),

    #[error("Request to {0} timed out after {1} seconds")]
    ApiTimeout(String, u64),

    #[error("API returned error status {0}: {1}")]
    ApiStatus(u16, String),

    #[error("Unexpected API response format: {0}")]
    ApiResponse(String),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
