//! Document rendering engine.
//!
//! One shared pipeline: resolve the template, build the Block sequence, then
//! hand the sequence to exactly one format renderer. The builder runs to
//! completion before any renderer starts, renderers treat the sequence as
//! read-only, and nothing is shared between concurrent render calls.

pub mod blocks;
pub mod docx;
pub mod handlers;
pub mod pdf;
pub mod template;

use thiserror::Error;

use crate::models::resume::ResumeData;
use blocks::build_blocks;
use template::TemplateSpec;

/// An internal failure while emitting bytes. Either a complete document buffer
/// is returned or none at all; partial output never escapes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document packaging failed: {0}")]
    Package(#[from] zip::result::ZipError),

    #[error("document part write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the record as a paginated PDF.
pub fn render_pdf(data: &ResumeData) -> Result<Vec<u8>, RenderError> {
    let spec = TemplateSpec::resolve(&data.template);
    let blocks = build_blocks(data, &spec);
    Ok(pdf::render(&blocks, &spec))
}

/// Renders the record as a DOCX package.
pub fn render_docx(data: &ResumeData) -> Result<Vec<u8>, RenderError> {
    let spec = TemplateSpec::resolve(&data.template);
    let blocks = build_blocks(data, &spec);
    docx::render(&blocks, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_formats_render_default_record() {
        let data = ResumeData::default();
        let pdf = render_pdf(&data).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
        let docx = render_docx(&data).unwrap();
        assert!(docx.starts_with(b"PK"), "DOCX must be a zip archive");
    }

    #[test]
    fn test_unknown_template_renders_like_fallback() {
        let mut a = ResumeData::default();
        a.template = "unknown-xyz".to_string();
        let mut b = ResumeData::default();
        b.template = "does-not-exist".to_string();
        // Identical fallback spec → identical DOCX bytes.
        assert_eq!(render_docx(&a).unwrap(), render_docx(&b).unwrap());
    }
}
