use serde::{Deserialize, Serialize};

/// The renderer's only state machine: a two-valued mode over one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMode {
    /// Markdown rendered as styled HTML.
    #[default]
    Preview,
    /// Markdown exposed as editable raw text.
    Edit,
}

/// The generated resume document. Lives for the session; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub markdown: String,
    pub mode: DocumentMode,
}
