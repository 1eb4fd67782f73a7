//! The shared layout intermediate representation.
//!
//! Both renderers consume the same `Block` sequence, so every "what goes on
//! the page" decision lives here and only format mechanics live in the
//! renderers. The builder is pure: no I/O, no randomness, input order
//! preserved for experience, education and skills.

use crate::models::resume::ResumeData;
use crate::render::template::{Alignment, Layout, TemplateSpec};

/// Fallback shown when the record has no name at all.
const NAME_PLACEHOLDER: &str = "Your Name";

/// One unit of the shared layout model.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// The top-of-document identity block. Always present.
    Header {
        name: String,
        job_title: String,
        contact_line: String,
        alignment: Alignment,
        uppercase_name: bool,
    },
    /// A section title such as "EXPERIENCE". Never emitted without content
    /// following it.
    SectionHeader { title: String },
    /// Wrapped body text.
    Paragraph { text: String },
    /// A "left ⟷ right" row (title/date, degree/date). Atomic: renderers must
    /// not split it across pages.
    TwoColumnLine {
        left: String,
        right: String,
        left_emphasis: bool,
        right_emphasis: bool,
    },
    /// A single line with optional emphasis (company, school).
    LabelLine { text: String, emphasis: bool },
    /// Items joined with ", " into one paragraph (skills).
    CommaList { items: Vec<String> },
}

/// Builds the Block sequence for one render call.
///
/// Section order is fixed (summary, experience, education, skills) and any
/// section whose backing data is empty contributes nothing — no dangling
/// headers. The header block itself always renders.
pub fn build_blocks(data: &ResumeData, spec: &TemplateSpec) -> Vec<Block> {
    let personal = &data.personal;
    let mut blocks = Vec::new();

    let name = personal
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NAME_PLACEHOLDER)
        .to_string();

    blocks.push(Block::Header {
        name,
        job_title: personal.job_title.clone().unwrap_or_default(),
        contact_line: contact_line(data, spec.layout),
        alignment: spec.header_alignment,
        uppercase_name: spec.uppercase_name,
    });

    if let Some(summary) = personal.summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        blocks.push(Block::SectionHeader {
            title: "SUMMARY".to_string(),
        });
        blocks.push(Block::Paragraph {
            text: summary.to_string(),
        });
    }

    if !data.experience.is_empty() {
        blocks.push(Block::SectionHeader {
            title: "EXPERIENCE".to_string(),
        });
        for entry in &data.experience {
            blocks.push(Block::TwoColumnLine {
                left: entry.title.clone(),
                right: entry.date.clone(),
                left_emphasis: true,
                right_emphasis: true,
            });
            blocks.push(Block::LabelLine {
                text: entry.company.clone(),
                emphasis: true,
            });
            blocks.push(Block::Paragraph {
                text: entry.description.clone(),
            });
        }
    }

    if !data.education.is_empty() {
        blocks.push(Block::SectionHeader {
            title: "EDUCATION".to_string(),
        });
        for entry in &data.education {
            blocks.push(Block::TwoColumnLine {
                left: entry.degree.clone(),
                right: entry.date.clone(),
                left_emphasis: true,
                right_emphasis: false,
            });
            blocks.push(Block::LabelLine {
                text: entry.school.clone(),
                emphasis: false,
            });
        }
    }

    if !data.skills.is_empty() {
        blocks.push(Block::SectionHeader {
            title: "SKILLS".to_string(),
        });
        blocks.push(Block::CommaList {
            items: data.skills.clone(),
        });
    }

    blocks
}

/// Joins the non-empty contact fields. Classic uses the wider separator its
/// centered header was designed around.
fn contact_line(data: &ResumeData, layout: Layout) -> String {
    let separator = match layout {
        Layout::Classic => "  |  ",
        _ => " | ",
    };
    let personal = &data.personal;
    [&personal.email, &personal.phone, &personal.linkedin]
        .into_iter()
        .filter_map(|f| f.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn spec(id: &str) -> TemplateSpec {
        TemplateSpec::resolve(id)
    }

    #[test]
    fn test_empty_record_yields_header_only() {
        let data = ResumeData::default();
        let blocks = build_blocks(&data, &spec("modern"));
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Header { name, .. } => assert_eq!(name, "Your Name"),
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn test_experience_groups_preserve_input_order() {
        let mut data = ResumeData::default();
        for i in 0..3 {
            data.experience.push(ExperienceEntry {
                title: format!("Role {i}"),
                company: format!("Company {i}"),
                date: format!("202{i}"),
                description: format!("Did thing {i}"),
            });
        }
        let blocks = build_blocks(&data, &spec("modern"));

        let titles: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::TwoColumnLine { left, .. } => Some(left.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["Role 0", "Role 1", "Role 2"]);

        // Each entry contributes exactly three blocks after the section header.
        let section_idx = blocks
            .iter()
            .position(|b| matches!(b, Block::SectionHeader { title } if title == "EXPERIENCE"))
            .unwrap();
        assert_eq!(blocks.len(), section_idx + 1 + 3 * 3);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let data = ResumeData {
            personal: PersonalInfo {
                summary: Some("   ".to_string()), // whitespace-only → omitted
                ..Default::default()
            },
            ..Default::default()
        };
        let blocks = build_blocks(&data, &spec("modern"));
        assert!(
            !blocks.iter().any(|b| matches!(b, Block::SectionHeader { .. })),
            "no section header may appear without content"
        );
    }

    #[test]
    fn test_classic_skills_scenario() {
        let data = ResumeData {
            personal: PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                job_title: Some("Engineer".to_string()),
                ..Default::default()
            },
            skills: vec!["Go".to_string(), "SQL".to_string()],
            template: "classic".to_string(),
            ..Default::default()
        };
        let blocks = build_blocks(&data, &spec("classic"));

        assert_eq!(blocks.len(), 3);
        match &blocks[0] {
            Block::Header {
                name,
                alignment,
                uppercase_name,
                ..
            } => {
                assert_eq!(name, "Jane Doe");
                assert_eq!(*alignment, Alignment::Center);
                assert!(*uppercase_name);
            }
            other => panic!("expected header, got {other:?}"),
        }
        assert_eq!(
            blocks[1],
            Block::SectionHeader {
                title: "SKILLS".to_string()
            }
        );
        assert_eq!(
            blocks[2],
            Block::CommaList {
                items: vec!["Go".to_string(), "SQL".to_string()]
            }
        );
    }

    #[test]
    fn test_education_rows() {
        let data = ResumeData {
            education: vec![EducationEntry {
                degree: "BSc Computer Science".to_string(),
                school: "MIT".to_string(),
                date: "2019".to_string(),
            }],
            ..Default::default()
        };
        let blocks = build_blocks(&data, &spec("modern"));
        assert_eq!(
            blocks[2],
            Block::TwoColumnLine {
                left: "BSc Computer Science".to_string(),
                right: "2019".to_string(),
                left_emphasis: true,
                right_emphasis: false,
            }
        );
        assert_eq!(
            blocks[3],
            Block::LabelLine {
                text: "MIT".to_string(),
                emphasis: false,
            }
        );
    }

    #[test]
    fn test_contact_line_skips_missing_fields() {
        let data = ResumeData {
            personal: PersonalInfo {
                email: Some("jane@example.com".to_string()),
                linkedin: Some("in/jane".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        match &build_blocks(&data, &spec("modern"))[0] {
            Block::Header { contact_line, .. } => {
                assert_eq!(contact_line, "jane@example.com | in/jane");
            }
            other => panic!("expected header, got {other:?}"),
        }

        match &build_blocks(&data, &spec("classic"))[0] {
            Block::Header { contact_line, .. } => {
                assert_eq!(contact_line, "jane@example.com  |  in/jane");
            }
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_is_deterministic() {
        let data = ResumeData {
            personal: PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                summary: Some("Builds things.".to_string()),
                ..Default::default()
            },
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let s = spec("modern");
        assert_eq!(build_blocks(&data, &s), build_blocks(&data, &s));
    }
}
