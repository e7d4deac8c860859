//! Hyperlink reattachment.
//!
//! PDF extraction collaborators can harvest a document's hidden anchor URLs,
//! which often differ from (and are more complete than) the visually printed
//! link text. Anchors are matched to projects and certifications by textual
//! similarity to the item's name, never by input order, and each URL is
//! assigned at most once.
//!
//! Similarity is normalized token overlap: lowercase alphanumeric tokens,
//! scored as |shared| / |smaller set|. The 0.5 threshold means at least half
//! of the shorter side's tokens must appear on the other side.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::ResumeRecord;

/// An anchor-text / hidden-URL pair harvested by the extraction collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperlinkAnchor {
    pub text: String,
    pub url: String,
}

const MIN_SIMILARITY: f64 = 0.5;

/// Normalized token overlap between two strings, in [0, 1].
pub fn similarity(a: &str, b: &str) -> f64 {
    let ta = tokens(a);
    let tb = tokens(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let shared = ta.intersection(&tb).count();
    shared as f64 / ta.len().min(tb.len()) as f64
}

fn tokens(s: &str) -> HashSet<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Attaches at most one URL to each project and certification, and upgrades
/// contact platform links to their hidden-anchor versions.
pub fn attach_links(record: &mut ResumeRecord, anchors: &[HyperlinkAnchor]) {
    if anchors.is_empty() {
        return;
    }

    let mut used: HashSet<String> = HashSet::new();

    for project in &mut record.projects {
        if let Some(url) = best_anchor(&project.name, anchors, &used) {
            debug!(project = %project.name, url = %url, "attached project link");
            used.insert(url.clone());
            project.link = Some(url);
        }
    }

    for cert in &mut record.certifications {
        if let Some(url) = best_anchor(&cert.name, anchors, &used) {
            debug!(certification = %cert.name, url = %url, "attached certification link");
            used.insert(url.clone());
            cert.link = Some(url);
        }
    }

    // Hidden anchors beat visually parsed link text for the contact block:
    // the anchor URL usually carries the full path and query parameters.
    if let Some(anchor) = find_platform_anchor(anchors, "linkedin.com") {
        record.contact.linkedin = Some(anchor.url.clone());
    }
    if let Some(anchor) = find_platform_anchor(anchors, "github.com") {
        record.contact.github = Some(anchor.url.clone());
    }
    if record.contact.portfolio.is_none() {
        if let Some(anchor) = anchors.iter().find(|a| {
            let lower = a.url.to_lowercase();
            lower.starts_with("http")
                && !lower.contains("linkedin.com")
                && !lower.contains("github.com")
        }) {
            record.contact.portfolio = Some(anchor.url.clone());
        }
    }
}

fn find_platform_anchor<'a>(
    anchors: &'a [HyperlinkAnchor],
    domain: &str,
) -> Option<&'a HyperlinkAnchor> {
    anchors
        .iter()
        .find(|a| a.url.to_lowercase().contains(domain))
}

/// Highest-scoring unused anchor above the threshold; ties keep the earlier
/// anchor, and a URL already assigned elsewhere is never reused.
fn best_anchor(
    label: &str,
    anchors: &[HyperlinkAnchor],
    used: &HashSet<String>,
) -> Option<String> {
    let mut best: Option<(f64, &HyperlinkAnchor)> = None;
    for anchor in anchors {
        if used.contains(&anchor.url) {
            continue;
        }
        let score = similarity(&anchor.text, label);
        if score < MIN_SIMILARITY {
            continue;
        }
        if best.map_or(true, |(b, _)| score > b) {
            best = Some((score, anchor));
        }
    }
    best.map(|(_, a)| a.url.clone())
}
