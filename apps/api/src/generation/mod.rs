//! Generation gateway — serializes the resume record into the fixed
//! instructional prompt and issues the single outbound LLM call.
//!
//! `ResumeGenerator` is the seam: `AppState` carries an `Arc<dyn
//! ResumeGenerator>`, so tests swap in a stub without touching handlers.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::GeminiClient;
use crate::models::resume::ResumeRecord;

pub mod handlers;
pub mod prompts;

/// Substituted for the document when the API answers but carries no text.
/// A soft failure: the placeholder becomes the result, not an error.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Failed to generate resume. Please try again.";

/// The one fallible remote-call abstraction in the system:
/// one request, one markdown string or one error.
#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate(&self, record: &ResumeRecord) -> Result<String, AppError>;
}

/// Production generator backed by the Gemini client.
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResumeGenerator for GeminiGenerator {
    async fn generate(&self, record: &ResumeRecord) -> Result<String, AppError> {
        let prompt = build_resume_prompt(record)?;

        let response = self
            .client
            .generate(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Resume generation call failed: {e}")))?;

        Ok(resolve_generated_text(response.text()))
    }
}

/// Builds the generation prompt by embedding the serialized record.
pub fn build_resume_prompt(record: &ResumeRecord) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(record)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize record: {e}")))?;
    Ok(prompts::RESUME_PROMPT_TEMPLATE.replace("{resume_json}", &resume_json))
}

/// Empty or missing response text degrades to the fallback message.
fn resolve_generated_text(text: Option<&str>) -> String {
    match text {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => EMPTY_RESPONSE_FALLBACK.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
