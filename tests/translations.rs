use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use imd_core::translate::{search_variations, text_matches_search};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn rede_expands_to_its_literal_one_hop_set() {
    // Direct entry: rede -> network, net, connection, connectivity.
    // Reverse entry: "network" lists "rede", contributing its key and its
    // other translation "conexão". Nothing further.
    assert_eq!(
        search_variations("rede"),
        set(&["rede", "network", "net", "connection", "connectivity", "conexão"])
    );
}

#[test]
fn reverse_lookup_brings_the_key_and_its_siblings() {
    assert_eq!(
        search_variations("network"),
        set(&["network", "rede", "conexão", "net", "connection", "connectivity"])
    );
}

#[test]
fn expansion_is_one_hop_not_a_closure() {
    // "net" appears only in the "rede" entry, so its expansion carries that
    // entry. "conexão" is reachable only through a second hop via the
    // "network" entry and must NOT appear.
    let variations = search_variations("net");
    assert_eq!(
        variations,
        set(&["net", "rede", "network", "connection", "connectivity"])
    );
    assert!(!variations.contains("conexão"));
}

#[test]
fn unknown_term_expands_to_itself_only() {
    assert_eq!(search_variations("xyzzy"), set(&["xyzzy"]));
}

#[test]
fn term_is_normalized_before_lookup() {
    assert_eq!(search_variations("  REDE "), search_variations("rede"));
}

#[test]
fn empty_term_expands_to_nothing() {
    assert!(search_variations("").is_empty());
    assert!(search_variations("   ").is_empty());
}

#[test]
fn text_matches_through_any_variation() {
    assert!(text_matches_search("Escritório sem rede desde cedo", "rede"));
    assert!(text_matches_search("Network outage reported", "rede"));
    assert!(text_matches_search("CONNECTIVITY degraded", "rede"));
    assert!(!text_matches_search("Printer out of toner", "rede"));
    assert!(!text_matches_search("", "rede"));
}

#[test]
fn asymmetric_entries_stay_asymmetric() {
    // "tela" has no entry of its own and is only reachable through "screen";
    // "screen" additionally picks up "display" through the "monitor" entry.
    // The two sets legitimately differ; do not "fix" the dictionary.
    let from_pt = search_variations("tela");
    let from_en = search_variations("screen");
    assert_eq!(from_pt, set(&["tela", "screen", "monitor"]));
    assert!(from_en.contains("display"));
    assert_ne!(from_pt, from_en);
}
