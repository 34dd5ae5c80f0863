use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Incident, MarkerSelection};

/// Lenient acceptance rule: a record is usable when it carries an identifier
/// OR a short description. Everything else may be empty.
pub fn is_valid_incident(incident: &Incident) -> bool {
    !incident.number.trim().is_empty() || !incident.short_description.trim().is_empty()
}

fn trim_fields(inc: Incident) -> Incident {
    Incident {
        number: inc.number.trim().to_string(),
        short_description: inc.short_description.trim().to_string(),
        caller: inc.caller.trim().to_string(),
        state: inc.state.trim().to_string(),
        category: inc.category.trim().to_string(),
        assignment_group: inc.assignment_group.trim().to_string(),
        assigned_to: inc.assigned_to.trim().to_string(),
        priority: inc.priority.trim().to_string(),
        closed: inc.closed.trim().to_string(),
        opened: inc.opened.trim().to_string(),
        updated: inc.updated.trim().to_string(),
        resolved: inc.resolved.trim().to_string(),
        updated_by_tags: inc.updated_by_tags.trim().to_string(),
        comments_and_work_notes: inc.comments_and_work_notes.trim().to_string(),
    }
}

/// Drop records failing the lenient rule and trim every surviving field.
pub fn clean_incidents(incidents: Vec<Incident>) -> Vec<Incident> {
    incidents
        .into_iter()
        .filter(is_valid_incident)
        .map(trim_fields)
        .collect()
}

pub fn is_valid_marker(marker: &MarkerSelection) -> bool {
    !marker.string.trim().is_empty()
}

/// Drop markers with an empty string, trim the rest, and assign a
/// deterministic id where one is missing.
pub fn clean_markers(markers: Vec<MarkerSelection>) -> Vec<MarkerSelection> {
    markers
        .into_iter()
        .enumerate()
        .filter(|(_, m)| is_valid_marker(m))
        .map(|(idx, m)| MarkerSelection {
            id: if m.id.trim().is_empty() {
                format!("string_{idx}")
            } else {
                m.id
            },
            string: m.string.trim().to_string(),
            description: m.description.and_then(|d| {
                let d = d.trim().to_string();
                if d.is_empty() {
                    None
                } else {
                    Some(d)
                }
            }),
        })
        .collect()
}

/// Remove duplicate markers, case-insensitively on the marker text. The first
/// occurrence wins.
pub fn dedup_markers(markers: Vec<MarkerSelection>) -> Vec<MarkerSelection> {
    let mut seen = BTreeSet::new();
    markers
        .into_iter()
        .filter(|m| seen.insert(m.string.trim().to_lowercase()))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub valid_percentage: f64,
}

fn list_report(total: usize, valid: usize) -> ListReport {
    ListReport {
        total,
        valid,
        invalid: total - valid,
        valid_percentage: if total == 0 {
            0.0
        } else {
            valid as f64 / total as f64 * 100.0
        },
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub incidents: ListReport,
    pub markers: ListReport,
    pub has_errors: bool,
}

/// Summarize how many records of each list survive cleaning.
pub fn validation_report(
    incidents: &[Incident],
    markers: &[MarkerSelection],
) -> ValidationReport {
    let valid_incidents = incidents.iter().filter(|i| is_valid_incident(i)).count();
    let valid_markers = markers.iter().filter(|m| is_valid_marker(m)).count();
    let incidents = list_report(incidents.len(), valid_incidents);
    let markers = list_report(markers.len(), valid_markers);
    let has_errors = incidents.invalid > 0 || markers.invalid > 0;
    ValidationReport {
        incidents,
        markers,
        has_errors,
    }
}
