//! Generated document API — raw access, mode toggle, preview, export.

pub mod handlers;
