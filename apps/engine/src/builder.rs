//! Pipeline orchestration: normalize, extract contact, segment, run the
//! entity parsers, audit for salvage, and assemble the final record.
//!
//! The whole pipeline is a pure, synchronous transformation; callers wanting
//! concurrency run independent invocations in parallel.

use tracing::debug;

use crate::contact::extract_contact;
use crate::errors::EngineError;
use crate::links::{attach_links, HyperlinkAnchor};
use crate::models::resume::ResumeRecord;
use crate::normalize::{normalize_inline, normalize_text};
use crate::parsers::certifications::parse_certifications;
use crate::parsers::education::parse_education;
use crate::parsers::experience::parse_experience;
use crate::parsers::projects::parse_projects;
use crate::parsers::skills::parse_skills;
use crate::salvage::{audit_sections, ParseOutcome};
use crate::sections::split_sections;

/// Structures already-extracted resume text into a `ResumeRecord`.
///
/// The only fatal failure is empty input; every parse-shape mismatch is
/// converted into salvage blocks on the record instead.
pub fn parse_resume(text: &str) -> Result<ResumeRecord, EngineError> {
    parse_resume_with_links(text, &[])
}

/// Like [`parse_resume`], but additionally reattaches harvested hyperlink
/// anchors to projects, certifications, and contact links.
pub fn parse_resume_with_links(
    text: &str,
    anchors: &[HyperlinkAnchor],
) -> Result<ResumeRecord, EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let raw_text = normalize_text(text);
    let contact = extract_contact(&raw_text);
    let (sections, mut other) = split_sections(&raw_text);

    let body = |name: &str| sections.get(name).map(String::as_str).unwrap_or("");

    let summary = sections
        .get("summary")
        .map(|s| normalize_inline(s))
        .filter(|s| !s.is_empty());
    let experience = parse_experience(body("experience"));
    let education = parse_education(body("education"));
    let projects = parse_projects(body("projects"));
    let skills = parse_skills(body("skills"));
    let certifications = parse_certifications(body("certifications"));

    other.extend(audit_sections(
        &sections,
        &ParseOutcome {
            experience: &experience,
            education: &education,
            projects: &projects,
            skills: &skills,
            certifications: &certifications,
        },
    ));

    debug!(
        experience = experience.len(),
        education = education.len(),
        projects = projects.len(),
        skill_groups = skills.len(),
        certifications = certifications.len(),
        other = other.len(),
        "assembled resume record"
    );

    let mut record = ResumeRecord {
        contact,
        summary,
        experience,
        projects,
        education,
        skills,
        certifications,
        other,
        raw_sections: sections,
        raw_text,
    };
    attach_links(&mut record, anchors);
    Ok(record)
}
