//! Skills parsing: "Group: a, b, c" lines become labeled groups; a section
//! with no colon lines at all falls back to one flat comma-split group.
//!
//! Comma splitting is parenthesis-depth-aware so that grouped values like
//! "AWS (S3, EC2)" survive as one entry.

use indexmap::IndexMap;

pub fn parse_skills(section_text: &str) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for line in section_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((label, rest)) = line.split_once(':') {
            let label = label.trim();
            let values = split_grouped_values(rest);
            if !label.is_empty() && !values.is_empty() {
                groups.entry(label.to_string()).or_default().extend(values);
            }
        }
    }

    if groups.is_empty() && !section_text.trim().is_empty() {
        let flat = split_grouped_values(&section_text.replace('\n', ","));
        groups.insert("skills".to_string(), flat);
    }

    groups
}

/// Splits on commas at parenthesis depth zero, then trims whitespace and
/// trailing periods from each value. Empty values are dropped.
pub fn split_grouped_values(s: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut depth: usize = 0;
    let mut cur = String::new();
    for ch in s.chars() {
        match ch {
            '(' => {
                depth += 1;
                cur.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                cur.push(ch);
            }
            ',' if depth == 0 => parts.push(std::mem::take(&mut cur)),
            _ => cur.push(ch),
        }
    }
    parts.push(cur);

    parts
        .into_iter()
        .map(|v| v.trim().trim_matches('.').trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_groups() {
        let groups = parse_skills("Languages: Rust, Python\nDatabases: Postgres, Redis.");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Languages"], vec!["Rust", "Python"]);
        assert_eq!(groups["Databases"], vec!["Postgres", "Redis"]);
    }

    #[test]
    fn test_parenthesized_commas_are_not_separators() {
        let groups = parse_skills("Cloud: AWS (S3, EC2), Azure");
        assert_eq!(groups["Cloud"], vec!["AWS (S3, EC2)", "Azure"]);
        assert_eq!(groups["Cloud"].len(), 2);
    }

    #[test]
    fn test_flat_fallback_when_no_colon_lines() {
        let groups = parse_skills("Rust, Python\nPostgres, Redis");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["skills"], vec!["Rust", "Python", "Postgres", "Redis"]);
    }

    #[test]
    fn test_repeated_labels_accumulate() {
        let groups = parse_skills("Tools: Git\nTools: Docker");
        assert_eq!(groups["Tools"], vec!["Git", "Docker"]);
    }

    #[test]
    fn test_group_order_follows_document_order() {
        let groups = parse_skills("Zeta: a\nAlpha: b");
        let labels: Vec<&String> = groups.keys().collect();
        assert_eq!(labels, ["Zeta", "Alpha"]);
    }

    #[test]
    fn test_empty_section_yields_no_groups() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills("   \n  ").is_empty());
    }

    #[test]
    fn test_unbalanced_parens_do_not_panic() {
        let values = split_grouped_values("a), b (c, d");
        assert_eq!(values, vec!["a)", "b (c, d"]);
    }
}
