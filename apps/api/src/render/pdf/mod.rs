//! Page-description renderer: Block sequence → PDF bytes.
//!
//! printpdf 0.8 uses a data-oriented API: pages are `Vec<Op>` operation lists
//! collected into `PdfPage` structs and serialised via `PdfDocument::save()`.
//! Everything mutable during emission (cursor position, the op list of the
//! current page) lives in a renderer-local [`Cursor`], so concurrent renders
//! share nothing. Fill color is re-stated before every run rather than
//! inherited across blocks.

pub mod metrics;

use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg,
    Point, Pt, Rgb, TextItem,
};
use tracing::debug;

use crate::render::blocks::Block;
use crate::render::template::{Alignment, FontClass, Layout, Rgb8, TemplateSpec};
use metrics::{get_metrics, wrap_words, FontMetricTable};

// A4 geometry, millimeters. The bottom margin is the auto-page-break trigger.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 10.0;
const MARGIN_RIGHT_MM: f32 = 10.0;
const MARGIN_TOP_MM: f32 = 10.0;
const MARGIN_BOTTOM_MM: f32 = 15.0;
const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - MARGIN_LEFT_MM - MARGIN_RIGHT_MM;
const RIGHT_EDGE_MM: f32 = PAGE_WIDTH_MM - MARGIN_RIGHT_MM;

// Text palette (sRGB).
const BODY_GRAY: Rgb8 = Rgb8::new(50, 50, 50);
const SECONDARY_GRAY: Rgb8 = Rgb8::new(100, 100, 100);
const LABEL_GRAY: Rgb8 = Rgb8::new(70, 70, 70);
const CONTACT_GRAY: Rgb8 = Rgb8::new(80, 80, 80);
const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

/// Row height of an atomic two-column line.
const TWO_COL_ROW_MM: f32 = 7.0;
/// Line height of wrapped body text.
const BODY_LINE_MM: f32 = 5.0;

/// Renders a finished, paginated PDF. The Block sequence is read-only input.
pub fn render(blocks: &[Block], spec: &TemplateSpec) -> Vec<u8> {
    let table = get_metrics(spec.font_class);
    let mut cursor = Cursor::new();

    for block in blocks {
        emit_block(&mut cursor, block, spec, table);
    }

    let pages = cursor.finish();
    let page_count = pages.len();

    let mut doc = PdfDocument::new("Resume");
    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

    debug!(blocks = blocks.len(), pages = page_count, "PDF assembly complete");
    output
}

// ────────────────────────────────────────────────────────────────────────────
// Block emission
// ────────────────────────────────────────────────────────────────────────────

fn emit_block(cursor: &mut Cursor, block: &Block, spec: &TemplateSpec, table: &FontMetricTable) {
    match block {
        Block::Header {
            name,
            job_title,
            contact_line,
            alignment,
            uppercase_name,
        } => {
            let name = if *uppercase_name {
                name.to_uppercase()
            } else {
                name.clone()
            };
            emit_header(cursor, spec, table, &name, job_title, contact_line, *alignment);
        }

        Block::SectionHeader { title } => {
            cursor.ensure_room(10.0);
            cursor.advance(2.0);
            let font = builtin_font(spec.font_class, true, false);
            cursor.write_line(title, font, 12.0, MARGIN_LEFT_MM, 8.0, spec.accent);
        }

        // Atomic: room is reserved for the whole row before anything is
        // written, so a row never straddles a page break.
        Block::TwoColumnLine {
            left,
            right,
            left_emphasis,
            right_emphasis,
        } => {
            cursor.ensure_room(TWO_COL_ROW_MM);
            let baseline = cursor.baseline(TWO_COL_ROW_MM);

            let left_font = builtin_font(spec.font_class, *left_emphasis, false);
            cursor.write_at(left, left_font, 11.0, MARGIN_LEFT_MM, baseline, BLACK);

            let right_font = builtin_font(spec.font_class, false, *right_emphasis);
            let right_color = if *right_emphasis { SECONDARY_GRAY } else { BLACK };
            let right_x = RIGHT_EDGE_MM - table.measure_mm(right, 10.0);
            cursor.write_at(right, right_font, 10.0, right_x, baseline, right_color);

            cursor.advance(TWO_COL_ROW_MM);
        }

        Block::LabelLine { text, emphasis } => {
            cursor.ensure_room(6.0);
            if *emphasis {
                let font = builtin_font(spec.font_class, true, false);
                cursor.write_line(text, font, 10.0, MARGIN_LEFT_MM, 6.0, LABEL_GRAY);
            } else {
                let font = builtin_font(spec.font_class, false, false);
                cursor.write_line(text, font, 10.0, MARGIN_LEFT_MM, 6.0, BODY_GRAY);
                cursor.advance(2.0);
            }
        }

        Block::Paragraph { text } => {
            let font = builtin_font(spec.font_class, false, false);
            for line in wrap_words(table, text, 10.0, CONTENT_WIDTH_MM) {
                cursor.ensure_room(BODY_LINE_MM);
                cursor.write_line(&line, font, 10.0, MARGIN_LEFT_MM, BODY_LINE_MM, BODY_GRAY);
            }
            cursor.advance(4.0);
        }

        Block::CommaList { items } => {
            let font = builtin_font(spec.font_class, false, false);
            let joined = items.join(", ");
            for line in wrap_words(table, &joined, 10.0, CONTENT_WIDTH_MM) {
                cursor.ensure_room(6.0);
                cursor.write_line(&line, font, 10.0, MARGIN_LEFT_MM, 6.0, BODY_GRAY);
            }
        }
    }
}

fn emit_header(
    cursor: &mut Cursor,
    spec: &TemplateSpec,
    table: &FontMetricTable,
    name: &str,
    job_title: &str,
    contact_line: &str,
    alignment: Alignment,
) {
    let x = |text: &str, size: f32| aligned_x(table, text, size, alignment);

    match spec.layout {
        Layout::Modern => {
            let bold = builtin_font(spec.font_class, true, false);
            let italic = builtin_font(spec.font_class, false, true);
            let regular = builtin_font(spec.font_class, false, false);

            cursor.write_line(name, bold, 24.0, x(name, 24.0), 12.0, spec.accent);
            cursor.write_line(job_title, italic, 14.0, x(job_title, 14.0), 10.0, SECONDARY_GRAY);
            cursor.write_line(contact_line, regular, 10.0, x(contact_line, 10.0), 8.0, CONTACT_GRAY);
            cursor.advance(5.0);
            cursor.rule(MARGIN_LEFT_MM, RIGHT_EDGE_MM, spec.accent);
            cursor.advance(8.0);
        }
        Layout::Classic => {
            let bold = builtin_font(spec.font_class, true, false);
            let regular = builtin_font(spec.font_class, false, false);

            cursor.write_line(name, bold, 20.0, x(name, 20.0), 10.0, BLACK);
            cursor.write_line(job_title, regular, 11.0, x(job_title, 11.0), 6.0, BLACK);
            cursor.write_line(contact_line, regular, 10.0, x(contact_line, 10.0), 6.0, BLACK);
            cursor.advance(5.0);
            cursor.rule(40.0, 170.0, BLACK);
            cursor.advance(8.0);
        }
        Layout::Fallback => {
            let bold = builtin_font(spec.font_class, true, false);
            let regular = builtin_font(spec.font_class, false, false);
            let job_upper = job_title.to_uppercase();

            cursor.write_line(name, bold, 30.0, x(name, 30.0), 15.0, BLACK);
            cursor.write_line(&job_upper, regular, 12.0, x(&job_upper, 12.0), 10.0, spec.accent);
            cursor.write_line(contact_line, regular, 10.0, x(contact_line, 10.0), 8.0, CONTACT_GRAY);
            cursor.advance(10.0);
        }
    }
}

fn aligned_x(table: &FontMetricTable, text: &str, size_pt: f32, alignment: Alignment) -> f32 {
    match alignment {
        Alignment::Left => MARGIN_LEFT_MM,
        Alignment::Center => (PAGE_WIDTH_MM - table.measure_mm(text, size_pt)) / 2.0,
    }
}

/// Composes a base-14 font from the body class and style flags.
fn builtin_font(class: FontClass, bold: bool, italic: bool) -> BuiltinFont {
    match (class, bold, italic) {
        (FontClass::Sans, false, false) => BuiltinFont::Helvetica,
        (FontClass::Sans, true, false) => BuiltinFont::HelveticaBold,
        (FontClass::Sans, false, true) => BuiltinFont::HelveticaOblique,
        (FontClass::Sans, true, true) => BuiltinFont::HelveticaBoldOblique,
        (FontClass::Serif, false, false) => BuiltinFont::TimesRoman,
        (FontClass::Serif, true, false) => BuiltinFont::TimesBold,
        (FontClass::Serif, false, true) => BuiltinFont::TimesItalic,
        (FontClass::Serif, true, true) => BuiltinFont::TimesBoldItalic,
        (FontClass::Mono, false, false) => BuiltinFont::Courier,
        (FontClass::Mono, true, false) => BuiltinFont::CourierBold,
        (FontClass::Mono, false, true) => BuiltinFont::CourierOblique,
        (FontClass::Mono, true, true) => BuiltinFont::CourierBoldOblique,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drawing cursor
// ────────────────────────────────────────────────────────────────────────────

/// Mutable drawing context for one render call: finished pages, the op list of
/// the page under construction, and the Y position measured from the top edge.
struct Cursor {
    pages: Vec<PdfPage>,
    ops: Vec<Op>,
    y_mm: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y_mm: MARGIN_TOP_MM,
        }
    }

    /// Breaks the page when `needed_mm` would cross into the bottom margin.
    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y_mm + needed_mm > PAGE_HEIGHT_MM - MARGIN_BOTTOM_MM {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.pages
            .push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops));
        self.y_mm = MARGIN_TOP_MM;
    }

    fn advance(&mut self, mm: f32) {
        self.y_mm += mm;
    }

    /// Text baseline (from the top edge) for a line of the given height
    /// starting at the current position.
    fn baseline(&self, line_height_mm: f32) -> f32 {
        self.y_mm + line_height_mm * 0.75
    }

    /// Writes one run at an explicit baseline without moving the cursor.
    /// The fill color is set on every run.
    fn write_at(
        &mut self,
        text: &str,
        font: BuiltinFont,
        size_pt: f32,
        x_mm: f32,
        baseline_mm: f32,
        color: Rgb8,
    ) {
        self.ops.push(Op::SetFillColor {
            col: fill_color(color),
        });
        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: Mm(x_mm).into_pt(),
                y: Mm(PAGE_HEIGHT_MM - baseline_mm).into_pt(),
            },
        });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(size_pt),
            font,
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font,
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Writes one full line and advances past it.
    fn write_line(
        &mut self,
        text: &str,
        font: BuiltinFont,
        size_pt: f32,
        x_mm: f32,
        line_height_mm: f32,
        color: Rgb8,
    ) {
        let baseline = self.baseline(line_height_mm);
        self.write_at(text, font, size_pt, x_mm, baseline, color);
        self.advance(line_height_mm);
    }

    /// Horizontal rule at the current Y position.
    fn rule(&mut self, x1_mm: f32, x2_mm: f32, color: Rgb8) {
        let y = Mm(PAGE_HEIGHT_MM - self.y_mm).into_pt();
        self.ops.push(Op::SetOutlineColor {
            col: fill_color(color),
        });
        self.ops.push(Op::SetOutlineThickness { pt: Pt(0.6) });
        self.ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: Point {
                            x: Mm(x1_mm).into_pt(),
                            y,
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Mm(x2_mm).into_pt(),
                            y,
                        },
                        bezier: false,
                    },
                ],
                is_closed: false,
            },
        });
    }

    fn finish(mut self) -> Vec<PdfPage> {
        if !self.ops.is_empty() || self.pages.is_empty() {
            self.break_page();
        }
        self.pages
    }
}

fn fill_color(color: Rgb8) -> Color {
    Color::Rgb(Rgb {
        r: f32::from(color.r) / 255.0,
        g: f32::from(color.g) / 255.0,
        b: f32::from(color.b) / 255.0,
        icc_profile: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::blocks::build_blocks;
    use crate::models::resume::{ExperienceEntry, PersonalInfo, ResumeData};

    fn sample_data() -> ResumeData {
        ResumeData {
            personal: PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                job_title: Some("Engineer".to_string()),
                email: Some("jane@example.com".to_string()),
                summary: Some("Ships reliable systems.".to_string()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                title: "Senior Engineer".to_string(),
                company: "Acme".to_string(),
                date: "2020 - Present".to_string(),
                description: "Built the billing pipeline end to end.".to_string(),
            }],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            ..Default::default()
        }
    }

    fn render_sample(template: &str) -> Vec<u8> {
        let mut data = sample_data();
        data.template = template.to_string();
        let spec = TemplateSpec::resolve(template);
        let blocks = build_blocks(&data, &spec);
        render(&blocks, &spec)
    }

    #[test]
    fn test_output_is_a_pdf_container() {
        let bytes = render_sample("modern");
        assert!(bytes.starts_with(b"%PDF-"), "missing PDF header");
        let tail = &bytes[bytes.len().saturating_sub(64)..];
        assert!(
            tail.windows(5).any(|w| w == b"%%EOF"),
            "missing PDF trailer"
        );
    }

    #[test]
    fn test_output_parses_with_lopdf() {
        for template in ["modern", "classic", "fallback"] {
            let bytes = render_sample(template);
            let doc = lopdf::Document::load_mem(&bytes)
                .unwrap_or_else(|e| panic!("{template}: unparseable PDF: {e}"));
            assert_eq!(doc.get_pages().len(), 1, "{template}: expected one page");
        }
    }

    #[test]
    fn test_long_experience_list_paginates() {
        let mut data = sample_data();
        data.experience = (0..40)
            .map(|i| ExperienceEntry {
                title: format!("Role {i}"),
                company: format!("Company {i}"),
                date: format!("20{:02}", i % 26),
                description: "Owned delivery of a cross-team platform migration \
                              covering services, storage and rollout tooling."
                    .to_string(),
            })
            .collect();
        let spec = TemplateSpec::resolve("modern");
        let blocks = build_blocks(&data, &spec);
        let bytes = render(&blocks, &spec);

        let doc = lopdf::Document::load_mem(&bytes).expect("unparseable PDF");
        assert!(
            doc.get_pages().len() > 1,
            "40 entries must overflow a single page"
        );
    }

    #[test]
    fn test_render_is_pure_at_content_level() {
        // The writer stamps container metadata (document id), so purity is
        // asserted over the page content streams rather than raw bytes.
        let spec = TemplateSpec::resolve("classic");
        let blocks = build_blocks(&sample_data(), &spec);
        let a = lopdf::Document::load_mem(&render(&blocks, &spec)).unwrap();
        let b = lopdf::Document::load_mem(&render(&blocks, &spec)).unwrap();

        let pages_a: Vec<_> = a.page_iter().collect();
        let pages_b: Vec<_> = b.page_iter().collect();
        assert_eq!(pages_a.len(), pages_b.len());
        for (pa, pb) in pages_a.iter().zip(&pages_b) {
            assert_eq!(
                a.get_page_content(*pa).unwrap(),
                b.get_page_content(*pb).unwrap(),
                "content streams must be identical across renders"
            );
        }
    }

    #[test]
    fn test_empty_record_renders_header_only_page() {
        let spec = TemplateSpec::resolve("unknown-xyz");
        let blocks = build_blocks(&ResumeData::default(), &spec);
        let bytes = render(&blocks, &spec);
        let doc = lopdf::Document::load_mem(&bytes).expect("unparseable PDF");
        assert_eq!(doc.get_pages().len(), 1);
    }
}
