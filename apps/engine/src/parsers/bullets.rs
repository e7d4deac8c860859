//! Bullet-line detection and cleaning shared by the experience, projects,
//! and certifications parsers.

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::normalize_inline;

/// Bullet glyphs seen across resume templates. "o" appears as a literal
/// glyph in Word-exported resumes.
pub const BULLET_CHARS: &[char] = &['•', '-', '●', '◦', '▪', '–', '·', 'o'];

lazy_static! {
    // "1. ", "(2) ", "12) " style prefixes
    static ref NUMBERED_BULLET: Regex = Regex::new(r"^\(?\d{1,3}[.)]\s+").unwrap();
    // OCR drops the leading capital from "Implemented" often enough to
    // special-case; the boundary check leaves intact words alone.
    static ref DROPPED_I: Regex = Regex::new(r"\b[mM]plemented\b").unwrap();
}

/// True if the trimmed line starts with a bullet glyph or a numbered-list
/// prefix.
pub fn is_bullet(line: &str) -> bool {
    let s = line.trim();
    if s.is_empty() {
        return false;
    }
    s.starts_with(BULLET_CHARS) || NUMBERED_BULLET.is_match(s)
}

/// Strips the bullet glyph or number prefix, repairs known OCR artifacts,
/// and collapses the text to a single line.
pub fn clean_bullet(line: &str) -> String {
    let s = line.trim();
    let s = s.trim_start_matches(|c| BULLET_CHARS.contains(&c)).trim();
    let s = NUMBERED_BULLET.replace(s, "");
    let s = DROPPED_I.replace_all(&s, "implemented");
    normalize_inline(s.trim())
}
