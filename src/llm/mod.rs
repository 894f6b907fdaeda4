//! Remote summarization via an LM Studio-compatible chat endpoint.

mod client;
mod lmstudio;
mod prompts;

pub use client::{build_provider, RemoteRequest, SummaryProvider};
pub use lmstudio::LmStudioClient;
