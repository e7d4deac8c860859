//! Experience parsing: a small state machine over section lines with four
//! competing header formats tried in fixed priority order.
//!
//! Header styles, in priority order:
//!   a. "Software Engineer II (Initech) Jan 2024 - Jun 2024"
//!   b. "Backend Engineer, Globex | Austin, TX Jan 2019 - Present"
//!   c. "Backend Engineer, Globex | Austin, TX Jan 2019 -" with the end token
//!      wrapped onto the next line
//!   d. "Software Engineer II (Initech)" with the date range on one of the
//!      next two lines
//!
//! A matched header flushes the in-progress item; bullets and continuation
//! lines accumulate under the current one. The final filter keeps only items
//! with a non-empty title and company: a title-only or company-only match is
//! noise, not a verified role, so it is discarded rather than salvaged.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::ExperienceItem;
use crate::parsers::bullets::{clean_bullet, is_bullet};
use crate::parsers::dates::{parse_date_range, DATE_RANGE, DATE_TOKEN, DATE_TOKEN_LINE, MONTH};

lazy_static! {
    // a. Title (Company) <range>
    static ref HDR_PAREN_SINGLE: Regex = Regex::new(&format!(
        r"(?i)^(?P<title>.+?)\s*\((?P<company>.+?)\)\s+(?P<duration>{t}\s*(?:-|–|to)\s*{t})\s*$",
        t = DATE_TOKEN.as_str()
    ))
    .unwrap();

    // b. Title, Company | Location <range>
    static ref HDR_PIPE_SINGLE: Regex = Regex::new(&format!(
        r"(?i)^(?P<title>[^,|]+)\s*,\s*(?P<company>[^|]+)\s*\|\s*(?P<location>.+?)\s+(?P<duration>{t}\s*(?:-|–|to)\s*{t})\s*$",
        t = DATE_TOKEN.as_str()
    ))
    .unwrap();

    // c. Title, Company | Location <Month Year> -   (end token on next line)
    static ref HDR_PIPE_SPLIT: Regex = Regex::new(&format!(
        r"(?i)^(?P<title>[^,|]+)\s*,\s*(?P<company>[^|]+)\s*\|\s*(?P<location>.+?)\s+(?P<start>{m}\s+\d{{4}})\s*[-–]\s*$",
        m = MONTH
    ))
    .unwrap();

    // d. Title (Company) alone; dates follow within two lines.
    static ref HDR_PAREN: Regex = Regex::new(r"^(?P<title>.+?)\s*\((?P<company>.+?)\)\s*$").unwrap();
}

/// Minimum length for a glyph-less line to be promoted to a bullet. Recovers
/// resumes whose bullet glyphs were stripped by extraction.
const SENTENCE_LIKE_LEN: usize = 25;

pub fn parse_experience(section_text: &str) -> Vec<ExperienceItem> {
    let lines: Vec<String> = section_text
        .lines()
        .map(|l| l.trim_end().to_string())
        .collect();

    let mut items: Vec<ExperienceItem> = Vec::new();
    let mut current: Option<ExperienceItem> = None;
    let mut bullets: Vec<String> = Vec::new();

    fn flush(
        current: &mut Option<ExperienceItem>,
        bullets: &mut Vec<String>,
        items: &mut Vec<ExperienceItem>,
    ) {
        if let Some(mut item) = current.take() {
            item.bullets = std::mem::take(bullets);
            items.push(item);
        } else {
            bullets.clear();
        }
    }

    let mut i = 0;
    while i < lines.len() {
        let raw = lines[i].trim().to_string();
        if raw.is_empty() {
            i += 1;
            continue;
        }

        if is_bullet(&raw) {
            if current.is_some() {
                bullets.push(clean_bullet(&raw));
            }
            i += 1;
            continue;
        }

        if let Some(caps) = HDR_PAREN_SINGLE.captures(&raw) {
            flush(&mut current, &mut bullets, &mut items);
            let duration = caps["duration"].trim().to_string();
            let (start, end) = parse_date_range(&duration);
            current = Some(ExperienceItem {
                title: caps["title"].trim().to_string(),
                company: caps["company"].trim().to_string(),
                location: None,
                duration: Some(duration),
                start,
                end,
                bullets: Vec::new(),
            });
            i += 1;
            continue;
        }

        if let Some(caps) = HDR_PIPE_SINGLE.captures(&raw) {
            flush(&mut current, &mut bullets, &mut items);
            let duration = caps["duration"].trim().to_string();
            let (start, end) = parse_date_range(&duration);
            current = Some(ExperienceItem {
                title: caps["title"].trim().to_string(),
                company: caps["company"].trim().to_string(),
                location: Some(caps["location"].trim().to_string()),
                duration: Some(duration),
                start,
                end,
                bullets: Vec::new(),
            });
            i += 1;
            continue;
        }

        if let Some(caps) = HDR_PIPE_SPLIT.captures(&raw) {
            flush(&mut current, &mut bullets, &mut items);
            let start = caps["start"].trim().to_string();
            let mut end: Option<String> = None;
            if i + 1 < lines.len() {
                let next = lines[i + 1].trim();
                if DATE_TOKEN_LINE.is_match(next) {
                    end = Some(next.to_string());
                    i += 1;
                }
            }
            let duration = match &end {
                Some(e) => format!("{start} - {e}"),
                None => format!("{start} -"),
            };
            current = Some(ExperienceItem {
                title: caps["title"].trim().to_string(),
                company: caps["company"].trim().to_string(),
                location: Some(caps["location"].trim().to_string()),
                duration: Some(duration),
                start: Some(start),
                end,
                bullets: Vec::new(),
            });
            i += 1;
            continue;
        }

        if let Some(caps) = HDR_PAREN.captures(&raw) {
            let next1 = if i + 1 < lines.len() { lines[i + 1].trim() } else { "" };
            let next2 = if i + 2 < lines.len() { lines[i + 2].trim() } else { "" };
            let range = DATE_RANGE
                .find(next1)
                .map(|m| (1usize, m.as_str().to_string()))
                .or_else(|| DATE_RANGE.find(next2).map(|m| (2usize, m.as_str().to_string())));
            if let Some((skip, duration)) = range {
                flush(&mut current, &mut bullets, &mut items);
                let (start, end) = parse_date_range(&duration);
                current = Some(ExperienceItem {
                    title: caps["title"].trim().to_string(),
                    company: caps["company"].trim().to_string(),
                    location: None,
                    duration: Some(duration),
                    start,
                    end,
                    bullets: Vec::new(),
                });
                i += 1 + skip;
                continue;
            }
        }

        if current.is_some() {
            if let Some(last) = bullets.last_mut() {
                // Wrapped continuation of the previous bullet.
                *last = clean_bullet(&format!("{last} {raw}"));
            } else if raw.chars().count() >= SENTENCE_LIKE_LEN
                && raw.chars().any(|c| c.is_alphabetic())
            {
                // Glyph-stripped bullet; promote the sentence-like line.
                bullets.push(clean_bullet(&raw));
            }
        }

        i += 1;
    }

    flush(&mut current, &mut bullets, &mut items);
    items.retain(|item| !item.title.is_empty() && !item.company.is_empty());
    items
}
