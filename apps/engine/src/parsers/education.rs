//! Education parsing: single-pass line scan, two strategies per line.
//!
//! Strategy a: a combined "Degree, Institution | Location <graduation>" line.
//! Strategy b: any line with a recognized degree keyword; GPA and date-range
//! tokens are stripped out of the degree text, and the following line (when
//! it is not itself a section heading) is consumed as the institution.
//!
//! Unlike experience, there is no completeness gate: the degree keyword is
//! itself the acceptance criterion.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::EducationItem;
use crate::parsers::dates::{parse_date_range, DATE_RANGE, MONTH};
use crate::patterns::{DEGREE, GPA_TOKEN, WS_RUN};
use crate::sections::match_heading;

lazy_static! {
    // "Bachelor of Science, University of Utah | Salt Lake City, UT March 2024"
    static ref GRAD_LINE: Regex = Regex::new(&format!(
        r"(?i)^(?P<degree>.+?)\s*,\s*(?P<inst>.+?)\s*\|\s*(?P<loc>.+?)\s+(?P<grad>{m}\s+\d{{4}}|\d{{4}})\s*$",
        m = MONTH
    ))
    .unwrap();
}

/// Extracts a GPA as "value" or "value/scale" from anywhere in the line.
pub fn extract_gpa(text: &str) -> Option<String> {
    let caps = GPA_TOKEN.captures(text)?;
    let value = caps.get(2)?.as_str();
    match caps.get(3) {
        Some(scale) => Some(format!("{value}/{}", scale.as_str())),
        None => Some(value.to_string()),
    }
}

fn strip_gpa(text: &str) -> String {
    GPA_TOKEN.replace_all(text, "").to_string()
}

/// Removes the first embedded date range, returning the cleaned remainder
/// and the range text when one was found.
pub fn strip_duration(text: &str) -> (String, Option<String>) {
    match DATE_RANGE.find(text) {
        None => (text.to_string(), None),
        Some(m) => {
            let duration = m.as_str().to_string();
            let cleaned = tidy(&text.replace(&duration, " "));
            (cleaned, Some(duration))
        }
    }
}

/// Trims separator residue left behind by token stripping.
fn tidy(s: &str) -> String {
    let s = s.trim_matches(|c: char| matches!(c, ' ' | '-' | '–' | '|' | ','));
    WS_RUN.replace_all(s, " ").trim().to_string()
}

pub fn parse_education(section_text: &str) -> Vec<EducationItem> {
    let lines: Vec<String> = section_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    let mut out: Vec<EducationItem> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];

        if let Some(caps) = GRAD_LINE.captures(line) {
            out.push(EducationItem {
                degree: Some(caps["degree"].trim().to_string()),
                institution: Some(caps["inst"].trim().to_string()),
                location: Some(caps["loc"].trim().to_string()),
                duration: None,
                start: None,
                end: None,
                graduation: Some(caps["grad"].trim().to_string()),
                gpa: extract_gpa(line),
            });
            i += 1;
            continue;
        }

        if DEGREE.is_match(line) {
            let gpa = extract_gpa(line);
            let without_gpa = strip_gpa(line);
            let (degree, mut duration) = strip_duration(&without_gpa);
            let degree = tidy(&degree);

            let mut institution: Option<String> = None;
            if i + 1 < lines.len() {
                let next_line = &lines[i + 1];
                if match_heading(next_line).is_none() {
                    let mut inst_line = next_line.clone();
                    if duration.is_none() {
                        let (stripped, found) = strip_duration(&inst_line);
                        inst_line = stripped;
                        duration = found;
                    }
                    let inst_line = tidy(&inst_line);
                    if !inst_line.is_empty() {
                        institution = Some(inst_line);
                    }
                    i += 1; // institution line consumed
                }
            }

            let (start, end) = match duration.as_deref() {
                Some(d) => parse_date_range(d),
                None => (None, None),
            };

            out.push(EducationItem {
                degree: if degree.is_empty() { None } else { Some(degree) },
                institution,
                location: None,
                duration,
                start,
                end,
                graduation: None,
                gpa,
            });
            i += 1;
            continue;
        }

        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_graduation_line() {
        let items = parse_education(
            "Bachelor of Science, University of Utah | Salt Lake City, UT Mar 2024",
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].degree.as_deref(), Some("Bachelor of Science"));
        assert_eq!(items[0].institution.as_deref(), Some("University of Utah"));
        assert_eq!(items[0].location.as_deref(), Some("Salt Lake City, UT"));
        assert_eq!(items[0].graduation.as_deref(), Some("Mar 2024"));
        assert!(items[0].duration.is_none());
    }

    #[test]
    fn test_degree_line_with_gpa_and_paired_institution_line() {
        let items = parse_education(
            "MS in Computer Science GPA: 3.8/4\n\
             University of Texas Aug 2022 - May 2024",
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].degree.as_deref(), Some("MS in Computer Science"));
        assert_eq!(items[0].institution.as_deref(), Some("University of Texas"));
        assert_eq!(items[0].gpa.as_deref(), Some("3.8/4"));
        assert_eq!(items[0].duration.as_deref(), Some("Aug 2022 - May 2024"));
        assert_eq!(items[0].start.as_deref(), Some("Aug 2022"));
        assert_eq!(items[0].end.as_deref(), Some("May 2024"));
    }

    #[test]
    fn test_degree_line_with_inline_duration() {
        let items = parse_education("MBA Aug 2020 - May 2022\nKellogg School of Management");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].degree.as_deref(), Some("MBA"));
        assert_eq!(items[0].duration.as_deref(), Some("Aug 2020 - May 2022"));
        assert_eq!(
            items[0].institution.as_deref(),
            Some("Kellogg School of Management")
        );
    }

    #[test]
    fn test_gpa_without_scale() {
        assert_eq!(extract_gpa("B.Tech CGPA 9.1"), Some("9.1".to_string()));
    }

    #[test]
    fn test_next_section_heading_is_not_consumed_as_institution() {
        let items = parse_education("Master of Science in Data Science\nSkills");
        assert_eq!(items.len(), 1);
        assert!(items[0].institution.is_none());
    }

    #[test]
    fn test_no_degree_keyword_yields_nothing() {
        assert!(parse_education("Dean's list\nHonor society").is_empty());
    }

    #[test]
    fn test_strip_duration_cleans_separator_residue() {
        let (cleaned, duration) = strip_duration("University of Texas | Aug 2022 - May 2024");
        assert_eq!(cleaned, "University of Texas");
        assert_eq!(duration.as_deref(), Some("Aug 2022 - May 2024"));
    }

    #[test]
    fn test_two_entries_parse_independently() {
        let items = parse_education(
            "MS in Computer Science\n\
             University of Texas Aug 2022 - May 2024\n\
             BS in Mathematics\n\
             University of Utah 2018 - 2022",
        );
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].degree.as_deref(), Some("BS in Mathematics"));
        assert_eq!(items[1].institution.as_deref(), Some("University of Utah"));
        assert_eq!(items[1].start.as_deref(), Some("2018"));
    }
}
