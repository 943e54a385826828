use std::sync::Arc;

use crate::generation::ResumeGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The session-scoped resume record and generated document.
    pub session: SessionStore,
    /// Pluggable generation gateway. Production: `GeminiGenerator`; tests stub it.
    pub generator: Arc<dyn ResumeGenerator>,
}
