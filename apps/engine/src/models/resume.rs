//! Data model for the structured resume record.
//!
//! Everything here is built once per parse invocation and returned to the
//! caller as an owned, immutable value. Serialization order of the maps
//! follows document order, which is why `IndexMap` is used instead of
//! `HashMap`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Contact details pulled from the leading lines of the document.
///
/// `location` and `title` are never guessed from unstructured text; they stay
/// `None` here and may be filled in by downstream category-assignment logic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
}

/// One work-experience entry. Retained in the final record only when both
/// `title` and `company` are non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// Raw date-range text as it appeared in the document.
    pub duration: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub bullets: Vec<String>,
}

/// One education entry. A recognized degree keyword is the acceptance
/// criterion; there is no required-field gate beyond that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    /// Single date token used when no range exists, e.g. "May 2024".
    pub graduation: Option<String>,
    /// Formatted as "value" or "value/scale", e.g. "3.8/4".
    pub gpa: Option<String>,
}

/// One project entry. Retained only when at least one bullet accumulated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub bullets: Vec<String>,
    /// Attached post-hoc from hyperlink harvesting; not parsed from the body.
    pub link: Option<String>,
}

/// One certification entry, optionally link-annotated post-hoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub link: Option<String>,
}

/// A piece of text the parsers could not structure, preserved verbatim so it
/// is never silently dropped. `reason` is a machine-readable code such as
/// `"no_headings_found"` or `"experience_parse_failed"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherBlock {
    pub heading: Option<String>,
    pub source_section: Option<String>,
    pub reason: String,
    pub text: String,
}

/// The composite record assembled by the builder. `raw_sections` and
/// `raw_text` are always present, even on a fully successful parse, so that
/// downstream repair tooling can re-run over the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub contact: Contact,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub education: Vec<EducationItem>,
    pub skills: IndexMap<String, Vec<String>>,
    pub certifications: Vec<Certification>,
    pub other: Vec<OtherBlock>,
    pub raw_sections: IndexMap<String, String>,
    pub raw_text: String,
}
