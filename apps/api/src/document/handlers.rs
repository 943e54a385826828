//! Axum route handlers for the generated document.
//!
//! The document is one markdown string plus a two-valued mode. Edit mode
//! reads and writes the string verbatim; preview and export go through the
//! renderer. The mode toggle never touches the markdown.

use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::models::document::{DocumentMode, GeneratedDocument};
use crate::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DocumentUpdate {
    pub markdown: String,
}

#[derive(Debug, Deserialize)]
pub struct ModeUpdate {
    pub mode: DocumentMode,
}

/// GET /api/v1/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<GeneratedDocument> {
    Json(state.session.document().await)
}

/// PUT /api/v1/document
///
/// Edit-mode writeback: the whole string is replaced on every keystroke.
pub async fn handle_put_document(
    State(state): State<AppState>,
    Json(update): Json<DocumentUpdate>,
) -> Json<GeneratedDocument> {
    state.session.set_markdown(update.markdown).await;
    Json(state.session.document().await)
}

/// PUT /api/v1/document/mode
pub async fn handle_set_mode(
    State(state): State<AppState>,
    Json(update): Json<ModeUpdate>,
) -> Json<GeneratedDocument> {
    state.session.set_mode(update.mode).await;
    Json(state.session.document().await)
}

/// GET /api/v1/document/preview
///
/// The styled HTML equivalent of the stored markdown.
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    let doc = state.session.document().await;
    Html(render::render_preview(&doc.markdown))
}

/// GET /api/v1/document/export
///
/// Complete printable page; the browser's print dialog does the PDF work.
pub async fn handle_export(State(state): State<AppState>) -> Html<String> {
    let doc = state.session.document().await;
    Html(render::export_page(&doc.markdown))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::errors::AppError;
    use crate::generation::ResumeGenerator;
    use crate::models::resume::ResumeRecord;

    struct NoopGenerator;

    #[async_trait]
    impl ResumeGenerator for NoopGenerator {
        async fn generate(&self, _record: &ResumeRecord) -> Result<String, AppError> {
            Ok(String::new())
        }
    }

    fn test_state() -> AppState {
        AppState {
            session: crate::session::SessionStore::new(),
            generator: Arc::new(NoopGenerator),
        }
    }

    #[tokio::test]
    async fn test_edit_mode_returns_markdown_verbatim() {
        let state = test_state();
        state.session.store_generated("# Jane\n\n*summary*".to_string()).await;
        state.session.set_mode(DocumentMode::Edit).await;

        let Json(doc) = handle_get_document(State(state)).await;
        assert_eq!(doc.markdown, "# Jane\n\n*summary*");
        assert_eq!(doc.mode, DocumentMode::Edit);
    }

    #[tokio::test]
    async fn test_writeback_replaces_whole_string() {
        let state = test_state();
        state.session.store_generated("old".to_string()).await;

        let Json(doc) = handle_put_document(
            State(state.clone()),
            Json(DocumentUpdate {
                markdown: "# Edited by hand".to_string(),
            }),
        )
        .await;
        assert_eq!(doc.markdown, "# Edited by hand");
    }

    #[tokio::test]
    async fn test_set_mode_leaves_markdown_untouched() {
        let state = test_state();
        state.session.store_generated("# Stable".to_string()).await;

        let Json(doc) = handle_set_mode(
            State(state.clone()),
            Json(ModeUpdate {
                mode: DocumentMode::Edit,
            }),
        )
        .await;
        assert_eq!(doc.mode, DocumentMode::Edit);
        assert_eq!(doc.markdown, "# Stable");
    }

    #[tokio::test]
    async fn test_preview_renders_styled_equivalent() {
        let state = test_state();
        state.session.store_generated("# Jane Doe".to_string()).await;

        let Html(html) = handle_preview(State(state)).await;
        assert!(html.contains("<h1>Jane Doe</h1>"));
    }
}
