use crate::domain::{Incident, MarkerSelection};
use crate::translate::search_variations;

/// Decide whether an incident relates to a marker string.
///
/// The marker and each searchable field are lower-cased and trimmed
/// independently; the marker must be a substring of `short_description` or of
/// `comments_and_work_notes` alone, never of a concatenation. An empty marker
/// matches nothing.
///
/// Every count, chart, table filter, and drill-down modal derives "relates to
/// a marker" from this one function.
pub fn incident_contains_marker(incident: &Incident, marker: &str) -> bool {
    let needle = marker.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    let short = incident.short_description.trim().to_lowercase();
    let notes = incident.comments_and_work_notes.trim().to_lowercase();
    short.contains(&needle) || notes.contains(&needle)
}

/// Keep incidents matching at least one of the configured markers. An empty
/// marker list applies no filter at all.
pub fn filter_incidents_by_markers(
    incidents: &[Incident],
    markers: &[MarkerSelection],
) -> Vec<Incident> {
    if markers.is_empty() {
        return incidents.to_vec();
    }
    incidents
        .iter()
        .filter(|inc| {
            markers
                .iter()
                .any(|m| incident_contains_marker(inc, &m.string))
        })
        .cloned()
        .collect()
}

/// Free-text search over the same two fields as marker matching, broadened by
/// the PT/EN variations of the term. Heuristic; used by the table search box
/// only, never by marker aggregation.
pub fn incident_matches_search(incident: &Incident, term: &str) -> bool {
    search_variations(term)
        .iter()
        .any(|variation| incident_contains_marker(incident, variation))
}
