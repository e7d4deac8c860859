//! Projects parsing: short plain lines start a project, bullets attach to
//! it. A name with zero bullets is dropped at flush time; like the
//! experience title+company gate, a bare name is not enough evidence of a
//! real entry.

use crate::models::resume::ProjectItem;
use crate::parsers::bullets::{clean_bullet, is_bullet};
use crate::parsers::dates::DATE_RANGE;
use crate::sections::match_heading;

/// Lines longer than this are prose, not project names.
const MAX_NAME_LEN: usize = 90;

pub fn parse_projects(section_text: &str) -> Vec<ProjectItem> {
    let mut projects: Vec<ProjectItem> = Vec::new();
    let mut current_name: Option<String> = None;
    let mut bullets: Vec<String> = Vec::new();

    fn flush(
        current_name: &mut Option<String>,
        bullets: &mut Vec<String>,
        projects: &mut Vec<ProjectItem>,
    ) {
        if let Some(name) = current_name.take() {
            if !bullets.is_empty() {
                projects.push(ProjectItem {
                    name,
                    bullets: std::mem::take(bullets),
                    link: None,
                });
            }
        }
        bullets.clear();
    }

    for raw in section_text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if is_bullet(line) {
            if current_name.is_some() {
                bullets.push(clean_bullet(line));
            }
            continue;
        }

        if line.chars().count() <= MAX_NAME_LEN
            && !DATE_RANGE.is_match(line)
            && match_heading(line).is_none()
        {
            if current_name.is_some() && !bullets.is_empty() {
                flush(&mut current_name, &mut bullets, &mut projects);
            }
            current_name = Some(line.to_string());
            continue;
        }

        if current_name.is_some() {
            if let Some(last) = bullets.last_mut() {
                *last = clean_bullet(&format!("{last} {line}"));
            }
        }
    }

    flush(&mut current_name, &mut bullets, &mut projects);
    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_then_bullets() {
        let projects = parse_projects(
            "Crate Tracker\n\
             • Built a shipment tracking dashboard\n\
             • Cut manual lookups by 80%",
        );
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Crate Tracker");
        assert_eq!(projects[0].bullets.len(), 2);
        assert!(projects[0].link.is_none());
    }

    #[test]
    fn test_name_only_projects_are_dropped() {
        let projects = parse_projects("Crate Tracker\nLog Shipper");
        assert!(projects.is_empty());
    }

    #[test]
    fn test_bulletless_name_is_replaced_by_next_name() {
        let projects = parse_projects(
            "Abandoned Idea\n\
             Crate Tracker\n\
             • Built a shipment tracking dashboard",
        );
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Crate Tracker");
    }

    #[test]
    fn test_multiple_projects_in_order() {
        let projects = parse_projects(
            "Crate Tracker\n\
             • Built a shipment tracking dashboard\n\
             Log Shipper\n\
             • Streams container logs to cold storage",
        );
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Crate Tracker");
        assert_eq!(projects[1].name, "Log Shipper");
    }

    #[test]
    fn test_continuation_appends_to_last_bullet() {
        // The continuation is a long prose line, too long to be a name.
        let long_tail = "built with a dependency graph resolver and an incremental cache layer that keeps rebuild times flat";
        let text = format!("Crate Tracker\n• Shipped a build scheduler\n{long_tail}");
        let projects = parse_projects(&text);
        assert_eq!(projects.len(), 1);
        assert_eq!(
            projects[0].bullets[0],
            format!("Shipped a build scheduler {long_tail}")
        );
    }

    #[test]
    fn test_date_range_lines_do_not_start_projects() {
        let projects = parse_projects(
            "Jan 2023 - Mar 2023\n\
             Crate Tracker\n\
             • Built a shipment tracking dashboard",
        );
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Crate Tracker");
    }
}
