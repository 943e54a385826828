//! Session store — the single owned copy of the resume record and the
//! generated document, shared across handlers via `AppState`.
//!
//! The whole record lives for the process lifetime; nothing is persisted.
//! All mutation goes through the methods here, so entry-id uniqueness and
//! list order are enforced in exactly one place.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{DocumentMode, GeneratedDocument};
use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord};

#[derive(Debug, Default)]
struct SessionData {
    record: ResumeRecord,
    document: GeneratedDocument,
}

/// Cheap-to-clone handle to the session state. Guards are never held across
/// an await on the LLM call; the generate handler snapshots the record first.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionData>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Field patches — all fields optional, only provided fields change
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub graduation_date: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Record ──────────────────────────────────────────────────────────────

    pub async fn record(&self) -> ResumeRecord {
        self.inner.read().await.record.clone()
    }

    /// Whole-record replacement. Scalar field edits from the client arrive as
    /// a full record, mirroring the form's single change handler.
    pub async fn replace_record(&self, record: ResumeRecord) {
        self.inner.write().await.record = record;
    }

    // ── Experience list ─────────────────────────────────────────────────────

    pub async fn add_experience(&self) -> ExperienceEntry {
        let entry = ExperienceEntry::empty();
        self.inner.write().await.record.experience.push(entry.clone());
        entry
    }

    pub async fn patch_experience(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<ExperienceEntry, AppError> {
        let mut data = self.inner.write().await;
        let entry = data
            .record
            .experience
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Experience entry {id} not found")))?;

        apply(&mut entry.company, patch.company);
        apply(&mut entry.role, patch.role);
        apply(&mut entry.start_date, patch.start_date);
        apply(&mut entry.end_date, patch.end_date);
        apply(&mut entry.description, patch.description);
        Ok(entry.clone())
    }

    pub async fn remove_experience(&self, id: Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.inner.write().await.record.experience, id, |e| e.id)
    }

    // ── Education list ──────────────────────────────────────────────────────

    pub async fn add_education(&self) -> EducationEntry {
        let entry = EducationEntry::empty();
        self.inner.write().await.record.education.push(entry.clone());
        entry
    }

    pub async fn patch_education(
        &self,
        id: Uuid,
        patch: EducationPatch,
    ) -> Result<EducationEntry, AppError> {
        let mut data = self.inner.write().await;
        let entry = data
            .record
            .education
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Education entry {id} not found")))?;

        apply(&mut entry.school, patch.school);
        apply(&mut entry.degree, patch.degree);
        apply(&mut entry.graduation_date, patch.graduation_date);
        Ok(entry.clone())
    }

    pub async fn remove_education(&self, id: Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.inner.write().await.record.education, id, |e| e.id)
    }

    // ── Project list ────────────────────────────────────────────────────────

    pub async fn add_project(&self) -> ProjectEntry {
        let entry = ProjectEntry::empty();
        self.inner.write().await.record.projects.push(entry.clone());
        entry
    }

    pub async fn patch_project(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> Result<ProjectEntry, AppError> {
        let mut data = self.inner.write().await;
        let entry = data
            .record
            .projects
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Project entry {id} not found")))?;

        apply(&mut entry.name, patch.name);
        apply(&mut entry.description, patch.description);
        if patch.link.is_some() {
            entry.link = patch.link;
        }
        Ok(entry.clone())
    }

    pub async fn remove_project(&self, id: Uuid) -> Result<(), AppError> {
        remove_by_id(&mut self.inner.write().await.record.projects, id, |e| e.id)
    }

    // ── Generated document ──────────────────────────────────────────────────

    pub async fn document(&self) -> GeneratedDocument {
        self.inner.read().await.document.clone()
    }

    /// Stores a freshly generated document and switches back to preview,
    /// matching the post-generation view switch in the client.
    pub async fn store_generated(&self, markdown: String) {
        let mut data = self.inner.write().await;
        data.document.markdown = markdown;
        data.document.mode = DocumentMode::Preview;
    }

    /// Raw writeback from edit mode. Whole-string replacement per keystroke.
    pub async fn set_markdown(&self, markdown: String) {
        self.inner.write().await.document.markdown = markdown;
    }

    pub async fn set_mode(&self, mode: DocumentMode) {
        self.inner.write().await.document.mode = mode;
    }
}

fn apply(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn remove_by_id<T>(list: &mut Vec<T>, id: Uuid, id_of: impl Fn(&T) -> Uuid) -> Result<(), AppError> {
    let len_before = list.len();
    list.retain(|e| id_of(e) != id);
    if list.len() == len_before {
        return Err(AppError::NotFound(format!("Entry {id} not found")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
