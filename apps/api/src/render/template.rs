//! Template resolution — template id → visual parameters.
//!
//! The template set is a closed enumeration. Resolution is total: anything the
//! frontend sends that we do not recognize (including typos, empty strings and
//! unicode) lands on the fallback spec, so rendering never fails on this axis.

use serde::{Deserialize, Serialize};

/// The three defined page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    Modern,
    Classic,
    Fallback,
}

/// Body font class; each renderer maps this onto its own font namespace
/// (PDF base-14 fonts vs. word-processor family names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontClass {
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
}

/// An sRGB triple. Renderers convert to their own color spaces
/// (0.0–1.0 floats for PDF, RRGGBB hex for WordprocessingML).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `RRGGBB` (no leading `#`), the form WordprocessingML expects.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The accent used for headers and section titles in non-classic layouts.
pub const ACCENT_BLUE: Rgb8 = Rgb8::new(0x25, 0x63, 0xEB);
pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

/// Resolved visual parameters for one named template. Derived once per render
/// call and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    pub layout: Layout,
    pub font_class: FontClass,
    pub accent: Rgb8,
    pub header_alignment: Alignment,
    pub uppercase_name: bool,
}

impl TemplateSpec {
    /// Maps a template identifier to its spec. Unrecognized ids resolve to the
    /// fallback spec deterministically.
    pub fn resolve(template_id: &str) -> Self {
        match template_id {
            "modern" => Self {
                layout: Layout::Modern,
                font_class: FontClass::Sans,
                accent: ACCENT_BLUE,
                header_alignment: Alignment::Left,
                uppercase_name: false,
            },
            "classic" => Self {
                layout: Layout::Classic,
                font_class: FontClass::Serif,
                accent: BLACK,
                header_alignment: Alignment::Center,
                uppercase_name: true,
            },
            _ => Self {
                layout: Layout::Fallback,
                font_class: FontClass::Sans,
                accent: ACCENT_BLUE,
                header_alignment: Alignment::Left,
                uppercase_name: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_spec() {
        let spec = TemplateSpec::resolve("modern");
        assert_eq!(spec.layout, Layout::Modern);
        assert_eq!(spec.font_class, FontClass::Sans);
        assert_eq!(spec.accent, ACCENT_BLUE);
        assert_eq!(spec.header_alignment, Alignment::Left);
        assert!(!spec.uppercase_name);
    }

    #[test]
    fn test_classic_spec() {
        let spec = TemplateSpec::resolve("classic");
        assert_eq!(spec.layout, Layout::Classic);
        assert_eq!(spec.font_class, FontClass::Serif);
        assert_eq!(spec.accent, BLACK);
        assert_eq!(spec.header_alignment, Alignment::Center);
        assert!(spec.uppercase_name);
    }

    #[test]
    fn test_unknown_ids_resolve_to_fallback() {
        let fallback = TemplateSpec::resolve("fallback");
        for id in ["unknown-xyz", "", "MODERN", "日本語", "classic ", "minimalist"] {
            assert_eq!(TemplateSpec::resolve(id), fallback, "id {id:?} should fall back");
        }
        assert_eq!(fallback.layout, Layout::Fallback);
        assert_eq!(fallback.accent, ACCENT_BLUE);
        assert_eq!(fallback.font_class, FontClass::Sans);
        assert_eq!(fallback.header_alignment, Alignment::Left);
    }

    #[test]
    fn test_accent_hex() {
        assert_eq!(ACCENT_BLUE.to_hex(), "2563EB");
        assert_eq!(BLACK.to_hex(), "000000");
    }
}
