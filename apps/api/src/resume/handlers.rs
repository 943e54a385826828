//! Axum route handlers for the Resume editing API.
//!
//! Edits are infallible by construction (no validation); only addressing a
//! missing entry id can fail, with 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord};
use crate::session::{EducationPatch, ExperiencePatch, ProjectPatch};
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json(state.session.record().await)
}

/// PUT /api/v1/resume
///
/// Whole-record replacement. Scalar field edits (name, email, skills, ...)
/// arrive as a full record, mirroring the form's single change handler.
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Json<ResumeRecord> {
    state.session.replace_record(record).await;
    Json(state.session.record().await)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/experience — append an empty entry, return it.
pub async fn handle_add_experience(State(state): State<AppState>) -> Json<ExperienceEntry> {
    Json(state.session.add_experience().await)
}

/// PATCH /api/v1/resume/experience/:id — update provided fields only.
pub async fn handle_patch_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<ExperienceEntry>, AppError> {
    Ok(Json(state.session.patch_experience(id, patch).await?))
}

/// DELETE /api/v1/resume/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.session.remove_experience(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/education
pub async fn handle_add_education(State(state): State<AppState>) -> Json<EducationEntry> {
    Json(state.session.add_education().await)
}

/// PATCH /api/v1/resume/education/:id
pub async fn handle_patch_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<EducationEntry>, AppError> {
    Ok(Json(state.session.patch_education(id, patch).await?))
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.session.remove_education(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/projects
pub async fn handle_add_project(State(state): State<AppState>) -> Json<ProjectEntry> {
    Json(state.session.add_project().await)
}

/// PATCH /api/v1/resume/projects/:id
pub async fn handle_patch_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<ProjectEntry>, AppError> {
    Ok(Json(state.session.patch_project(id, patch).await?))
}

/// DELETE /api/v1/resume/projects/:id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.session.remove_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
