//! Certifications parsing: bullet lines are cleaned and collected; when the
//! section has no bullets at all, every non-empty line is taken verbatim.

use crate::models::resume::Certification;
use crate::parsers::bullets::{clean_bullet, is_bullet};

pub fn parse_certifications(section_text: &str) -> Vec<Certification> {
    let bulleted: Vec<Certification> = section_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && is_bullet(l))
        .map(|l| Certification {
            name: clean_bullet(l),
            link: None,
        })
        .collect();

    if !bulleted.is_empty() {
        return bulleted;
    }

    section_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| Certification {
            name: l.to_string(),
            link: None,
        })
        .collect()
}
