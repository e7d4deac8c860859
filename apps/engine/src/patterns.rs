//! Shared compiled patterns for contact and education token extraction.
//!
//! These are build-time constants; resumes vary enough that the patterns are
//! deliberately loose and the callers apply their own gates.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref EMAIL: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();

    pub static ref PHONE: Regex =
        Regex::new(r"(\+?\d{1,3}[\s.\-]?)?(\(?\d{3}\)?[\s.\-]?)\d{3}[\s.\-]?\d{4}").unwrap();

    pub static ref URL: Regex =
        Regex::new(r"(?i)(https?://\S+|www\.\S+|\bgithub\.com/\S+|\blinkedin\.com/\S+)").unwrap();

    pub static ref DEGREE: Regex = Regex::new(
        r"(?i)\b(MS|M\.S\.|Master|MTech|M\.Tech|MBA|PhD|Bachelors|Bachelor|B\.E\.|B\.Tech|BE|BS|B\.S\.)\b"
    )
    .unwrap();

    /// Matches "GPA: 3.8/4", "CGPA 9.1", "GPA-3.5" and similar.
    pub static ref GPA_TOKEN: Regex = Regex::new(
        r"(?i)\b(C?GPA)\s*[:\-]?\s*(\d+(?:\.\d+)?)(?:\s*/\s*(\d+(?:\.\d+)?))?\b"
    )
    .unwrap();

    pub static ref WS_RUN: Regex = Regex::new(r"\s{2,}").unwrap();
}
