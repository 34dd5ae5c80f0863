use pretty_assertions::assert_eq;

use imd_core::analytics::{
    aggregate_by, aggregate_by_assignment_group, aggregate_by_category, top_n,
    FALLBACK_NO_CATEGORY, FALLBACK_UNASSIGNED,
};
use imd_core::domain::Incident;

fn incident_with_category(category: &str) -> Incident {
    Incident {
        category: category.to_string(),
        ..Incident::default()
    }
}

fn incident_with_group(group: &str) -> Incident {
    Incident {
        assignment_group: group.to_string(),
        ..Incident::default()
    }
}

#[test]
fn empty_category_falls_back_to_literal_label() {
    let incidents = vec![
        incident_with_category("Software"),
        incident_with_category(""),
        incident_with_category("Software"),
        incident_with_category(""),
        incident_with_category(""),
    ];
    let buckets = aggregate_by_category(&incidents);

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].key, FALLBACK_NO_CATEGORY);
    assert_eq!(buckets[0].count, 3);
    assert_eq!(buckets[1].key, "Software");
    assert_eq!(buckets[1].count, 2);
}

#[test]
fn percentage_is_relative_to_the_filtered_total() {
    let incidents = vec![
        incident_with_group("N1"),
        incident_with_group("N1"),
        incident_with_group("N1"),
        incident_with_group("N2"),
    ];
    let buckets = aggregate_by(&incidents, |i| i.assignment_group.as_str(), FALLBACK_UNASSIGNED);

    assert_eq!(buckets[0].key, "N1");
    assert!((buckets[0].percentage - 75.0).abs() < f64::EPSILON);
    assert!((buckets[1].percentage - 25.0).abs() < f64::EPSILON);
}

#[test]
fn empty_input_produces_no_buckets() {
    let buckets = aggregate_by_category(&[]);
    assert!(buckets.is_empty());
}

#[test]
fn count_ties_resolve_to_first_encountered_order() {
    let incidents = vec![
        incident_with_group("Zeta"),
        incident_with_group("Alpha"),
        incident_with_group("Zeta"),
        incident_with_group("Alpha"),
    ];
    let buckets = aggregate_by(&incidents, |i| i.assignment_group.as_str(), FALLBACK_UNASSIGNED);

    // Same count; "Zeta" appeared first in the input.
    assert_eq!(buckets[0].key, "Zeta");
    assert_eq!(buckets[1].key, "Alpha");
}

#[test]
fn top_ten_is_deterministic_regardless_of_input_order() {
    // 15 groups with distinct counts: group-01 has 1 incident ... group-15
    // has 15, interleaved so no ordering falls out of the input by accident.
    let mut incidents = Vec::new();
    for round in 0..15 {
        for g in (round + 1)..=15 {
            incidents.push(incident_with_group(&format!("group-{g:02}")));
        }
    }

    let buckets = aggregate_by_assignment_group(&incidents);
    assert_eq!(buckets.len(), 10);

    let keys: Vec<&str> = buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "group-15", "group-14", "group-13", "group-12", "group-11", "group-10", "group-09",
            "group-08", "group-07", "group-06",
        ]
    );
    let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![15, 14, 13, 12, 11, 10, 9, 8, 7, 6]);
}

#[test]
fn truncation_applies_after_the_full_sort() {
    let incidents = vec![
        incident_with_group("small"),
        incident_with_group("big"),
        incident_with_group("big"),
        incident_with_group("big"),
        incident_with_group("mid"),
        incident_with_group("mid"),
    ];
    let buckets = top_n(
        aggregate_by(&incidents, |i| i.assignment_group.as_str(), FALLBACK_UNASSIGNED),
        2,
    );
    let keys: Vec<&str> = buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["big", "mid"]);
}

#[test]
fn unassigned_fallback_is_a_real_group() {
    let incidents = vec![incident_with_group(""), incident_with_group("N1")];
    let buckets = aggregate_by_assignment_group(&incidents);
    assert!(buckets.iter().any(|b| b.key == FALLBACK_UNASSIGNED));
}
