//! Prompt builders for the polish endpoints.

use crate::models::resume::ResumeData;

pub const SYSTEM: &str = "You are a professional resume writer. Respond with the \
requested text only, no preamble and no markdown.";

pub fn optimize_prompt(text: &str) -> String {
    format!(
        "Please polish and improve the following text to be more professional \
         and impactful for a resume:\n\n{text}"
    )
}

pub fn summary_prompt(data: &ResumeData) -> String {
    let personal = &data.personal;
    let mut context = format!(
        "Name: {}, Job: {}. ",
        personal.full_name.as_deref().unwrap_or_default(),
        personal.job_title.as_deref().unwrap_or_default()
    );
    if !data.experience.is_empty() {
        let roles: Vec<String> = data
            .experience
            .iter()
            .map(|e| format!("{} at {}", e.title, e.company))
            .collect();
        context.push_str("Experience: ");
        context.push_str(&roles.join(", "));
    }
    format!(
        "Write a professional resume summary (around 3-4 sentences) for this \
         candidate: {context}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo};

    #[test]
    fn test_optimize_prompt_embeds_text() {
        let prompt = optimize_prompt("shipped things");
        assert!(prompt.contains("shipped things"));
    }

    #[test]
    fn test_summary_prompt_includes_roles() {
        let data = ResumeData {
            personal: PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                job_title: Some("Engineer".to_string()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                title: "SRE".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let prompt = summary_prompt(&data);
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("SRE at Acme"));
    }
}
