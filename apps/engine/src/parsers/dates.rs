//! Date tokens and ranges as they appear in resumes: "Jan 2020", bare years,
//! and the literal "Present", joined by a hyphen, en-dash, or "to".

use lazy_static::lazy_static;
use regex::Regex;

pub const MONTH: &str = r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)";

lazy_static! {
    /// A single date token: "Month YYYY", "YYYY", or "Present".
    pub static ref DATE_TOKEN: String = format!(r"(?:{MONTH}\s+\d{{4}}|\d{{4}}|Present)");

    /// "<token> <sep> <token>" anywhere in a line.
    pub static ref DATE_RANGE: Regex = Regex::new(&format!(
        r"(?i)(?P<start>{t})\s*(?:-|–|to)\s*(?P<end>{t})",
        t = DATE_TOKEN.as_str()
    ))
    .unwrap();

    /// A line consisting of exactly one date token; used when a PDF line-wrap
    /// pushes the end of a range onto the next line.
    pub static ref DATE_TOKEN_LINE: Regex =
        Regex::new(&format!(r"(?i)^{t}$", t = DATE_TOKEN.as_str())).unwrap();
}

/// Pulls (start, end) out of a raw duration string, or (None, None) when no
/// range is present. The tokens are returned verbatim, casing included.
pub fn parse_date_range(duration: &str) -> (Option<String>, Option<String>) {
    match DATE_RANGE.captures(duration) {
        Some(caps) => (
            Some(caps["start"].to_string()),
            Some(caps["end"].to_string()),
        ),
        None => (None, None),
    }
}
