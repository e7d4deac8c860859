//! Text normalization for extraction artifacts.
//!
//! Both functions are pure. `normalize_text` keeps line structure (the
//! segmenter depends on it); `normalize_inline` flattens to a single display
//! line for values like the summary or a cleaned bullet.

use lazy_static::lazy_static;
use regex::Regex;

use crate::patterns::WS_RUN;

lazy_static! {
    static ref NEWLINE_RUN: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref HSPACE_RUN: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    // "engi-\nneer" -> "engineer"
    static ref HYPHEN_WRAP: Regex = Regex::new(r"(\w)-\n(\w)").unwrap();
}

/// Canonicalizes raw extracted text: CR to LF, blank-line runs collapsed to
/// one blank line, horizontal whitespace runs collapsed, hyphen-broken words
/// rejoined across line breaks, then trimmed.
pub fn normalize_text(text: &str) -> String {
    let text = text.replace('\r', "\n");
    let text = NEWLINE_RUN.replace_all(&text, "\n\n");
    let text = HSPACE_RUN.replace_all(&text, " ");
    let text = HYPHEN_WRAP.replace_all(&text, "${1}${2}");
    text.trim().to_string()
}

/// Collapses wrapped/newline text into a single line. Does not attempt
/// hyphen rejoin; by the time a value reaches this point the line break is
/// a soft wrap, not a word break.
pub fn normalize_inline(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = text.replace('\r', " ").replace('\n', " ");
    WS_RUN.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_blank_line_runs_to_one_blank_line() {
        assert_eq!(normalize_text("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_converts_carriage_returns() {
        // \r\n becomes two newlines, i.e. a paragraph break; runs of three or
        // more would have collapsed back down to two.
        assert_eq!(normalize_text("a\r\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_rejoins_hyphen_broken_words() {
        assert_eq!(normalize_text("software engi-\nneer role"), "software engineer role");
    }

    #[test]
    fn test_collapses_horizontal_whitespace_runs() {
        assert_eq!(normalize_text("a  \t  b"), "a b");
    }

    #[test]
    fn test_trims_leading_and_trailing_whitespace() {
        assert_eq!(normalize_text("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn test_inline_flattens_newlines_to_spaces() {
        assert_eq!(
            normalize_inline("Backend engineer with\nsix years of experience"),
            "Backend engineer with six years of experience"
        );
    }

    #[test]
    fn test_inline_does_not_rejoin_hyphens() {
        assert_eq!(normalize_inline("engi-\nneer"), "engi- neer");
    }

    #[test]
    fn test_inline_empty_input() {
        assert_eq!(normalize_inline(""), "");
    }
}
