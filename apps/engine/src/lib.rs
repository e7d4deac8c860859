//! Resume structuring engine.
//!
//! Takes already-extracted resume text (PDF text extraction and OCR are
//! upstream collaborators) and produces a structured record: contact info,
//! experience, education, projects, skills, certifications. Resumes have no
//! fixed layout, so parsing is heuristic with multiple competing pattern
//! branches; anything a parser cannot structure is preserved as a flagged
//! raw block rather than dropped.

pub mod builder;
pub mod contact;
pub mod errors;
pub mod links;
pub mod models;
pub mod normalize;
pub mod parsers;
pub mod patterns;
pub mod salvage;
pub mod sections;

pub use builder::{parse_resume, parse_resume_with_links};
pub use errors::EngineError;
pub use links::HyperlinkAnchor;
pub use models::resume::ResumeRecord;
