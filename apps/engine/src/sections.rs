//! Section segmentation: heading-alias matching and two-pass body splitting.
//!
//! The alias table is a build-time constant. Adding support for a new resume
//! template usually means adding one alias string here and nothing else.

use indexmap::IndexMap;
use tracing::debug;

use crate::models::resume::OtherBlock;
use crate::normalize::normalize_text;
use crate::patterns::WS_RUN;

/// Canonical section names mapped to their accepted heading synonyms.
/// Matching is case- and punctuation-insensitive, with "&" read as "and".
pub const SECTION_ALIASES: &[(&str, &[&str])] = &[
    (
        "summary",
        &["summary", "professional summary", "profile", "objective"],
    ),
    (
        "experience",
        &[
            "experience",
            "work experience",
            "employment",
            "professional experience",
            "marketing experience",
            "relevant experience",
            "career history",
        ],
    ),
    (
        "education",
        &["education", "academics", "academic background"],
    ),
    (
        "skills",
        &[
            "skills",
            "technical skills",
            "core skills",
            "tools",
            "technologies",
            "expertise",
            "technical expertise",
        ],
    ),
    (
        "projects",
        &[
            "projects",
            "project experience",
            "academic projects",
            "key projects",
        ],
    ),
    (
        "certifications",
        &[
            "certifications",
            "certificates",
            "licenses",
            "achievements",
            "awards",
            "certifications and awards",
            "certifications & awards",
            "certifications & achievements",
        ],
    ),
];

/// Canonical names whose parsers feed the salvage auditor, in audit order.
pub const ENTITY_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "projects",
    "skills",
    "certifications",
];

/// Lowercases, reads "&" as "and", strips everything but letters and spaces,
/// and collapses whitespace. Both headings and aliases go through this before
/// comparison.
pub fn normalize_heading(s: &str) -> String {
    let s = s.to_lowercase().replace('&', " and ");
    let mut kept = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii_lowercase() {
            kept.push(ch);
        } else if ch.is_whitespace() {
            kept.push(' ');
        }
    }
    WS_RUN.replace_all(&kept, " ").trim().to_string()
}

/// Returns the canonical section name if the line is a recognized heading.
pub fn match_heading(line: &str) -> Option<&'static str> {
    let norm = normalize_heading(line);
    if norm.is_empty() {
        return None;
    }
    for (canon, aliases) in SECTION_ALIASES {
        if aliases.iter().any(|alias| normalize_heading(alias) == norm) {
            return Some(canon);
        }
    }
    None
}

/// Splits normalized text into an ordered section-body map plus the salvage
/// blocks produced during segmentation itself.
///
/// Pass 1 records every recognized heading line. Pass 2 takes the text
/// strictly between consecutive headings as each body; a section recognized
/// twice gets its bodies concatenated with a blank-line separator. Text
/// before the first heading is preserved as a "Header" block, and a document
/// with no recognized headings at all becomes one "unknown" section plus a
/// total-salvage block.
pub fn split_sections(text: &str) -> (IndexMap<String, String>, Vec<OtherBlock>) {
    let lines: Vec<&str> = text.lines().collect();

    let mut recognized: Vec<(usize, &'static str)> = Vec::new();
    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(canon) = match_heading(line) {
            recognized.push((i, canon));
        }
    }

    if recognized.is_empty() {
        let body = normalize_text(text);
        let mut sections = IndexMap::new();
        sections.insert("unknown".to_string(), body.clone());
        let block = OtherBlock {
            heading: None,
            source_section: None,
            reason: "no_headings_found".to_string(),
            text: body,
        };
        return (sections, vec![block]);
    }

    let mut sections: IndexMap<String, String> = IndexMap::new();
    let mut other_blocks: Vec<OtherBlock> = Vec::new();

    let first_idx = recognized[0].0;
    let preface = normalize_text(&lines[..first_idx].join("\n"));
    if !preface.is_empty() {
        other_blocks.push(OtherBlock {
            heading: Some("Header".to_string()),
            source_section: None,
            reason: "content_before_first_heading".to_string(),
            text: preface,
        });
    }

    for (k, &(start_idx, canon)) in recognized.iter().enumerate() {
        let end_idx = recognized.get(k + 1).map(|r| r.0).unwrap_or(lines.len());
        let body = normalize_text(&lines[start_idx + 1..end_idx].join("\n"));
        if body.is_empty() {
            continue;
        }
        match sections.get_mut(canon) {
            Some(existing) => {
                // Duplicate heading occurrence: concatenate in document order.
                let merged = normalize_text(&format!("{existing}\n\n{body}"));
                *existing = merged;
            }
            None => {
                sections.insert(canon.to_string(), body);
            }
        }
    }

    debug!(
        headings = recognized.len(),
        sections = sections.len(),
        "segmented resume text"
    );
    (sections, other_blocks)
}
