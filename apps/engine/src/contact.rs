//! Contact extraction: email, phone, profile links, and a best-guess name
//! from the document's leading lines.

use crate::models::resume::Contact;
use crate::patterns::{EMAIL, PHONE, URL};
use crate::sections::match_heading;

/// Maximum number of leading non-empty lines scanned for a name.
const NAME_SCAN_LINES: usize = 12;

/// Extracts deterministic contact fields from normalized text.
///
/// `location` and `title` are deliberately left unset: guessing them from
/// unstructured text produces worse data than leaving the fields empty.
pub fn extract_contact(text: &str) -> Contact {
    let email = EMAIL.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE.find(text).map(|m| m.as_str().to_string());

    let urls: Vec<&str> = URL.find_iter(text).map(|m| m.as_str()).collect();
    let linkedin = first_url_containing(&urls, "linkedin.com");
    let github = first_url_containing(&urls, "github.com");
    let portfolio = urls
        .iter()
        .find(|u| {
            let lower = u.to_lowercase();
            (lower.starts_with("http") || lower.starts_with("www."))
                && !lower.contains("linkedin.com")
                && !lower.contains("github.com")
        })
        .map(|u| u.to_string());

    Contact {
        name: guess_name(text),
        email,
        phone,
        linkedin,
        github,
        portfolio,
        location: None,
        title: None,
    }
}

fn first_url_containing(urls: &[&str], needle: &str) -> Option<String> {
    urls.iter()
        .find(|u| u.to_lowercase().contains(needle))
        .map(|u| u.to_string())
}

/// Name heuristic: the first of the leading lines that is not contact info,
/// not a recognized heading, and looks like a short run of words.
fn guess_name(text: &str) -> Option<String> {
    for line in text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(NAME_SCAN_LINES)
    {
        let lower = line.to_lowercase();
        if EMAIL.is_match(line)
            || PHONE.is_match(line)
            || lower.contains("linkedin")
            || lower.contains("github")
        {
            continue;
        }
        if match_heading(line).is_some() {
            continue;
        }
        let words = line.split_whitespace().count();
        if (1..=5).contains(&words) && line.chars().any(|c| c.is_alphabetic()) {
            return Some(line.to_string());
        }
    }
    None
}
