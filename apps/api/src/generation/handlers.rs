//! Axum route handler for the Generate action.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub markdown: String,
}

/// POST /api/v1/resume/generate
///
/// One generation request per call: snapshot the record, build the prompt,
/// make the single outbound LLM call, store the markdown as the document.
/// On failure the previously stored document is left untouched.
pub async fn handle_generate(
    State(state): State<AppState>,
) -> Result<Json<GenerateResponse>, AppError> {
    // Snapshot first so no lock is held across the remote call.
    let record = state.session.record().await;

    let markdown = state.generator.generate(&record).await?;

    info!("Generated resume document ({} bytes of markdown)", markdown.len());
    state.session.store_generated(markdown.clone()).await;

    Ok(Json(GenerateResponse { markdown }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
