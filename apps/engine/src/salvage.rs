//! Salvage auditing: any recognized section that carried text but produced
//! zero structured items becomes a raw block with a `<section>_parse_failed`
//! reason. Purely additive; items already produced are never touched.

use indexmap::IndexMap;
use tracing::warn;

use crate::models::resume::{
    Certification, EducationItem, ExperienceItem, OtherBlock, ProjectItem,
};

pub struct ParseOutcome<'a> {
    pub experience: &'a [ExperienceItem],
    pub education: &'a [EducationItem],
    pub projects: &'a [ProjectItem],
    pub skills: &'a IndexMap<String, Vec<String>>,
    pub certifications: &'a [Certification],
}

pub fn audit_sections(
    sections: &IndexMap<String, String>,
    outcome: &ParseOutcome<'_>,
) -> Vec<OtherBlock> {
    let mut blocks = Vec::new();

    let mut salvage = |heading: &str, name: &str, text: &str| {
        warn!(
            section = name,
            "section has text but no structured items; keeping raw block"
        );
        blocks.push(OtherBlock {
            heading: Some(heading.to_string()),
            source_section: Some(name.to_string()),
            reason: format!("{name}_parse_failed"),
            text: text.to_string(),
        });
    };

    if let Some(body) = sections.get("experience") {
        if outcome.experience.is_empty() {
            salvage("Experience", "experience", body);
        }
    }
    if let Some(body) = sections.get("education") {
        if outcome.education.is_empty() {
            salvage("Education", "education", body);
        }
    }
    if let Some(body) = sections.get("projects") {
        if outcome.projects.is_empty() {
            salvage("Projects", "projects", body);
        }
    }
    if let Some(body) = sections.get("skills") {
        // The flat fallback means skills only truly failed when even that
        // single group came back empty.
        let failed = outcome.skills.is_empty()
            || (outcome.skills.len() == 1
                && outcome.skills.get("skills").is_some_and(|v| v.is_empty()));
        if failed {
            salvage("Skills", "skills", body);
        }
    }
    if let Some(body) = sections.get("certifications") {
        if outcome.certifications.is_empty() {
            salvage("Certifications", "certifications", body);
        }
    }

    blocks
}
