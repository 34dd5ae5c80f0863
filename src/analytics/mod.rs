use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Incident, MarkerSelection};
use crate::matching::incident_contains_marker;

pub const FALLBACK_NO_CATEGORY: &str = "Sem categoria";
pub const FALLBACK_UNASSIGNED: &str = "Não Atribuído";
pub const ASSIGNMENT_GROUP_TOP_N: usize = 10;

/// Per-marker aggregation result: count plus the exact matching subset.
/// Recomputed from scratch on every input change; never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerCount {
    pub id: String,
    pub marker: String,
    pub description: Option<String>,
    pub count: usize,
    pub incidents: Vec<Incident>,
}

/// Aggregate incidents per marker, sorted descending by count.
///
/// One entry per input marker; ties keep the marker input order (the sort is
/// stable). When `active` is given, markers outside the set are excluded from
/// the output entirely, not zeroed — this powers the filterable chart.
/// Side-effect-free; inputs are never mutated.
pub fn aggregate_markers(
    incidents: &[Incident],
    markers: &[MarkerSelection],
    active: Option<&BTreeSet<String>>,
) -> Vec<MarkerCount> {
    let mut out: Vec<MarkerCount> = markers
        .iter()
        .filter(|m| active.map_or(true, |set| set.contains(&m.string)))
        .map(|m| {
            let matching: Vec<Incident> = incidents
                .iter()
                .filter(|inc| incident_contains_marker(inc, &m.string))
                .cloned()
                .collect();
            MarkerCount {
                id: m.id.clone(),
                marker: m.string.clone(),
                description: m.description.clone(),
                count: matching.len(),
                incidents: matching,
            }
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Categorical grouping result. `percentage` is relative to the filtered
/// incident count the grouping was computed from, not any global total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupBucket {
    pub key: String,
    pub count: usize,
    pub percentage: f64,
}

/// Group incidents by a field accessor, substituting `fallback` for
/// empty/missing values — the fallback label is a real group, never dropped.
///
/// Sorted descending by count; ties resolve to first-encountered order in the
/// input, so buckets are tracked in insertion order rather than a sorted map.
pub fn aggregate_by<F>(incidents: &[Incident], key_fn: F, fallback: &str) -> Vec<GroupBucket>
where
    F: for<'a> Fn(&'a Incident) -> &'a str,
{
    let mut keys: Vec<String> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for inc in incidents {
        let raw = key_fn(inc);
        let key = if raw.is_empty() { fallback } else { raw };
        match keys.iter().position(|k| k.as_str() == key) {
            Some(idx) => counts[idx] += 1,
            None => {
                keys.push(key.to_string());
                counts.push(1);
            }
        }
    }

    let total = incidents.len();
    let mut out: Vec<GroupBucket> = keys
        .into_iter()
        .zip(counts)
        .map(|(key, count)| GroupBucket {
            key,
            count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Truncate to the N highest-count buckets. Applied strictly after the full
/// descending sort, so the result is deterministic regardless of input order.
pub fn top_n(mut buckets: Vec<GroupBucket>, n: usize) -> Vec<GroupBucket> {
    buckets.truncate(n);
    buckets
}

pub fn aggregate_by_category(incidents: &[Incident]) -> Vec<GroupBucket> {
    aggregate_by(incidents, |inc| inc.category.as_str(), FALLBACK_NO_CATEGORY)
}

/// Assignment-group drilldown: Top 10 groups by count.
pub fn aggregate_by_assignment_group(incidents: &[Incident]) -> Vec<GroupBucket> {
    top_n(
        aggregate_by(
            incidents,
            |inc| inc.assignment_group.as_str(),
            FALLBACK_UNASSIGNED,
        ),
        ASSIGNMENT_GROUP_TOP_N,
    )
}
