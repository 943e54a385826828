//! Document renderer — markdown to styled HTML via pulldown-cmark.
//!
//! Preview mode maps headings, paragraphs, lists, links, emphasis, and rules
//! to fixed presentational styles. Export wraps the same rendering in a
//! complete page that hands off to the browser's native print dialog; no
//! custom PDF generation.

use pulldown_cmark::{html, Options, Parser};

/// Fixed presentational styles for the rendered resume. One stylesheet for
/// both the preview fragment and the printable export page.
const RESUME_STYLESHEET: &str = r#"
.resume-preview {
  font-family: Georgia, 'Times New Roman', serif;
  color: #334155;
  max-width: 210mm;
  margin: 0 auto;
  padding: 2rem;
  line-height: 1.6;
}
.resume-preview h1 {
  font-size: 1.875rem;
  font-weight: 700;
  color: #0f172a;
  border-bottom: 2px solid #1e293b;
  padding-bottom: 0.5rem;
  margin-bottom: 1rem;
  text-transform: uppercase;
  letter-spacing: 0.025em;
}
.resume-preview h2 {
  font-size: 1.25rem;
  font-weight: 700;
  color: #1e293b;
  margin: 1.5rem 0 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  border-bottom: 1px solid #e2e8f0;
  padding-bottom: 0.25rem;
}
.resume-preview h3 {
  font-size: 1.125rem;
  font-weight: 600;
  color: #1e293b;
  margin: 1rem 0 0.5rem;
}
.resume-preview p {
  font-size: 0.875rem;
  margin-bottom: 0.75rem;
}
.resume-preview ul {
  list-style: disc outside;
  margin: 0 0 1rem 1.25rem;
  font-size: 0.875rem;
}
.resume-preview li {
  padding-left: 0.25rem;
  margin-bottom: 0.25rem;
}
.resume-preview a {
  color: #4f46e5;
  text-decoration: none;
}
.resume-preview a:hover {
  text-decoration: underline;
}
.resume-preview strong {
  font-weight: 600;
  color: #0f172a;
}
.resume-preview hr {
  border: none;
  border-top: 1px solid #e2e8f0;
  margin: 1.5rem 0;
}
"#;

const PRINT_STYLESHEET: &str = r#"
@media print {
  body { margin: 0; }
  .resume-preview { padding: 0; max-width: none; }
}
"#;

/// Shown in preview when no document has been generated yet.
const EMPTY_PLACEHOLDER: &str = r#"<div class="resume-preview resume-preview-empty">
<h3>Ready to Build</h3>
<p>Fill out your details and generate a resume to see it here.</p>
</div>"#;

/// Renders the markdown as a styled HTML fragment for preview mode.
/// An empty document renders the placeholder instead.
pub fn render_preview(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let parser = Parser::new_ext(markdown, Options::empty());
    let mut body = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut body, parser);

    format!("<div class=\"resume-preview\">\n{body}</div>")
}

/// Builds the complete printable page for the export action. The embedded
/// script opens the host's print dialog; printing to PDF is the browser's job.
pub fn export_page(markdown: &str) -> String {
    let fragment = render_preview(markdown);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume</title>
<style>{RESUME_STYLESHEET}{PRINT_STYLESHEET}</style>
</head>
<body>
{fragment}
<script>window.addEventListener('load', function () {{ window.print(); }});</script>
</body>
</html>
"#
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
