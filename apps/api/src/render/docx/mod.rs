//! WordprocessingML renderer: Block sequence → DOCX bytes.
//!
//! The word processor owns pagination and reflow, so this renderer only emits
//! styled paragraphs and runs. Parts are assembled as strings and zipped by
//! [`package`]; styles are generated per document so the template's font and
//! accent color live in `styles.xml` rather than on every run.

mod package;

use std::borrow::Cow;

use tracing::debug;

use crate::render::blocks::Block;
use crate::render::template::{Alignment, FontClass, Layout, TemplateSpec};
use crate::render::RenderError;

/// The decorative rule emitted under classic section headings: a full-width
/// run of underscores at 2pt.
const CLASSIC_RULE: &str = "__________________________________________________";

/// Renders a complete DOCX package. The Block sequence is read-only input.
pub fn render(blocks: &[Block], spec: &TemplateSpec) -> Result<Vec<u8>, RenderError> {
    let document = document_xml(blocks, spec);
    let styles = styles_xml(spec);
    let bytes = package::write_package(&document, &styles)?;
    debug!(blocks = blocks.len(), bytes = bytes.len(), "DOCX assembly complete");
    Ok(bytes)
}

fn esc(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

// ────────────────────────────────────────────────────────────────────────────
// word/document.xml
// ────────────────────────────────────────────────────────────────────────────

fn document_xml(blocks: &[Block], spec: &TemplateSpec) -> String {
    let mut xml = String::new();
    xml.push_str(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );

    for block in blocks {
        emit_block(&mut xml, block, spec);
    }

    // A4 with 2cm margins, in twips.
    xml.push_str(
        r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1134" w:right="1134" w:bottom="1134" w:left="1134" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#,
    );
    xml.push_str("</w:body></w:document>");
    xml
}

fn emit_block(xml: &mut String, block: &Block, spec: &TemplateSpec) {
    match block {
        Block::Header {
            name,
            job_title,
            contact_line,
            alignment,
            uppercase_name,
        } => {
            let name = if *uppercase_name {
                Cow::Owned(name.to_uppercase())
            } else {
                Cow::Borrowed(name.as_str())
            };
            let centered = *alignment == Alignment::Center;

            if spec.layout == Layout::Classic {
                // Manual header: big bold name, then an italic title line and
                // the contact line in one centered paragraph.
                open_paragraph(xml, "", centered);
                push_run(xml, &name, r#"<w:b/><w:sz w:val="44"/><w:szCs w:val="44"/>"#);
                xml.push_str("</w:p>");

                open_paragraph(xml, "", centered);
                push_run(xml, &format!("{job_title}\n"), "<w:i/>");
                push_run(xml, contact_line, "");
                xml.push_str("</w:p>");
            } else {
                // Title-styled name (accent color comes from styles.xml),
                // bold job-title run and contact run in one paragraph.
                open_paragraph(xml, "Title", centered);
                push_run(xml, &name, "");
                xml.push_str("</w:p>");

                open_paragraph(xml, "", centered);
                push_run(xml, &format!("{job_title}\n"), "<w:b/>");
                push_run(xml, contact_line, "");
                xml.push_str("</w:p>");
            }
        }

        Block::SectionHeader { title } => {
            if spec.layout == Layout::Classic {
                // Heading1 is black under classic; pin the alignment and draw
                // the thin underscore rule the PDF renders as a line.
                xml.push_str(r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/><w:jc w:val="left"/></w:pPr>"#);
                push_run(xml, title, "");
                xml.push_str("</w:p>");

                xml.push_str(r#"<w:p><w:pPr><w:spacing w:after="0"/></w:pPr>"#);
                push_run(xml, CLASSIC_RULE, r#"<w:sz w:val="4"/><w:szCs w:val="4"/>"#);
                xml.push_str("</w:p>");
            } else {
                open_paragraph(xml, "Heading1", false);
                push_run(xml, title, "");
                xml.push_str("</w:p>");
            }
        }

        Block::TwoColumnLine {
            left,
            right,
            left_emphasis,
            right_emphasis,
        } => {
            // Tab-separated column fallback; exact tab-stop alignment is the
            // word processor's concern.
            xml.push_str(r#"<w:p><w:pPr><w:spacing w:after="0"/></w:pPr>"#);
            push_run(xml, left, if *left_emphasis { "<w:b/>" } else { "" });
            xml.push_str("<w:r>");
            if *right_emphasis {
                xml.push_str("<w:rPr><w:i/></w:rPr>");
            }
            xml.push_str("<w:tab/>");
            push_text(xml, right);
            xml.push_str("</w:r></w:p>");
        }

        Block::LabelLine { text, emphasis } => {
            xml.push_str("<w:p>");
            push_run(xml, text, if *emphasis { "<w:i/>" } else { "" });
            xml.push_str("</w:p>");
        }

        Block::Paragraph { text } => {
            xml.push_str("<w:p>");
            push_run(xml, text, "");
            xml.push_str("</w:p>");
        }

        Block::CommaList { items } => {
            xml.push_str("<w:p>");
            push_run(xml, &items.join(", "), "");
            xml.push_str("</w:p>");
        }
    }
}

fn open_paragraph(xml: &mut String, style: &str, centered: bool) {
    xml.push_str("<w:p>");
    if !style.is_empty() || centered {
        xml.push_str("<w:pPr>");
        if !style.is_empty() {
            xml.push_str(&format!(r#"<w:pStyle w:val="{style}"/>"#));
        }
        if centered {
            xml.push_str(r#"<w:jc w:val="center"/>"#);
        }
        xml.push_str("</w:pPr>");
    }
}

/// One run. Embedded newlines become line breaks, mirroring how the form's
/// multi-line fields are meant to read.
fn push_run(xml: &mut String, text: &str, props: &str) {
    xml.push_str("<w:r>");
    if !props.is_empty() {
        xml.push_str("<w:rPr>");
        xml.push_str(props);
        xml.push_str("</w:rPr>");
    }
    let mut first = true;
    for segment in text.split('\n') {
        if !first {
            xml.push_str("<w:br/>");
        }
        first = false;
        if !segment.is_empty() {
            push_text(xml, segment);
        }
    }
    xml.push_str("</w:r>");
}

fn push_text(xml: &mut String, text: &str) {
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&esc(text));
    xml.push_str("</w:t>");
}

// ────────────────────────────────────────────────────────────────────────────
// word/styles.xml
// ────────────────────────────────────────────────────────────────────────────

fn styles_xml(spec: &TemplateSpec) -> String {
    let font = match spec.font_class {
        FontClass::Sans => "Arial",
        FontClass::Serif | FontClass::Mono => "Times New Roman",
    };
    let heading_color = match spec.layout {
        Layout::Classic => "000000".to_string(),
        _ => spec.accent.to_hex(),
    };
    let title_color = spec.accent.to_hex();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:pPr><w:spacing w:after="120"/></w:pPr><w:rPr><w:sz w:val="52"/><w:szCs w:val="52"/><w:color w:val="{title_color}"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:pPr><w:spacing w:before="240" w:after="80"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="28"/><w:szCs w:val="28"/><w:color w:val="{heading_color}"/></w:rPr></w:style></w:styles>"#
    )
}
