//! AI text polish — the one best-effort, fallible collaborator in the system.
//!
//! The render path never calls this; it only ever receives already-polished
//! text. All LLM traffic goes through `llm_client`.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::ResumeData;

/// Pluggable polish backend. Carried in `AppState` as `Arc<dyn Polisher>` so
/// the service runs with or without an API key.
#[async_trait]
pub trait Polisher: Send + Sync {
    /// Rewrites free text to be more professional. Best-effort: callers fall
    /// back to the input unchanged on error.
    async fn polish(&self, text: &str) -> Result<String, LlmError>;

    /// Drafts a 3-4 sentence professional summary from the record.
    async fn summarize(&self, data: &ResumeData) -> Result<String, LlmError>;
}

/// Claude-backed polisher.
pub struct LlmPolisher(pub LlmClient);

#[async_trait]
impl Polisher for LlmPolisher {
    async fn polish(&self, text: &str) -> Result<String, LlmError> {
        self.0
            .call_text(&prompts::optimize_prompt(text), prompts::SYSTEM)
            .await
    }

    async fn summarize(&self, data: &ResumeData) -> Result<String, LlmError> {
        self.0
            .call_text(&prompts::summary_prompt(data), prompts::SYSTEM)
            .await
    }
}

/// Deterministic no-LLM backend used when no API key is configured:
/// polish echoes its input, summaries come back empty.
pub struct EchoPolisher;

#[async_trait]
impl Polisher for EchoPolisher {
    async fn polish(&self, text: &str) -> Result<String, LlmError> {
        Ok(text.to_string())
    }

    async fn summarize(&self, _data: &ResumeData) -> Result<String, LlmError> {
        Ok(String::new())
    }
}
