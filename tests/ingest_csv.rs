use pretty_assertions::assert_eq;

use imd_core::ingest::incident_csv::ingest_incident_csv;
use imd_core::ingest::marker_csv::ingest_marker_csv;

const HEADER: &str = "number,short_description,caller,state,category,assignment_group,\
assigned_to,priority,closed,opened,updated,resolved,updated_by_tags,comments,\
comments_and_work_notes\n";

#[test]
fn rows_map_positionally_into_incident_fields() {
    let csv_text = format!(
        "{HEADER}INC0001,\"Interface travada\",Ana,Open,Software,Suporte N1,Bruno,\
         \"1 - Critical\",,2026-01-05 08:30:00,2026-01-05 10:00:00,,tag1,older note,\"work note, quoted\"\n"
    );
    let summary = ingest_incident_csv(&csv_text).expect("ingest");

    assert_eq!(summary.incidents.len(), 1);
    let inc = &summary.incidents[0];
    assert_eq!(inc.number, "INC0001");
    assert_eq!(inc.short_description, "Interface travada");
    assert_eq!(inc.caller, "Ana");
    assert_eq!(inc.state, "Open");
    assert_eq!(inc.category, "Software");
    assert_eq!(inc.assignment_group, "Suporte N1");
    assert_eq!(inc.assigned_to, "Bruno");
    assert_eq!(inc.priority, "1 - Critical");
    assert_eq!(inc.closed, "");
    assert_eq!(inc.opened, "2026-01-05 08:30:00");
    assert_eq!(inc.updated, "2026-01-05 10:00:00");
    assert_eq!(inc.resolved, "");
    assert_eq!(inc.updated_by_tags, "tag1");
    assert_eq!(inc.comments_and_work_notes, "work note, quoted");
}

#[test]
fn comments_fall_back_to_column_13_when_14_is_missing() {
    // Only 14 columns: the work-notes column is absent, so the previous
    // column supplies the text.
    let csv_text = format!(
        "{HEADER}INC0002,Lentidão,Ana,Open,,,,,,2026-01-06,,,tags,fallback note\n"
    );
    let summary = ingest_incident_csv(&csv_text).expect("ingest");
    assert_eq!(
        summary.incidents[0].comments_and_work_notes,
        "fallback note"
    );
}

#[test]
fn short_rows_are_skipped_and_counted() {
    let csv_text = format!(
        "{HEADER}INC0003,Valid row,Ana,Open,,,,,,2026-01-06,,,,,\nonly,three,fields\n"
    );
    let summary = ingest_incident_csv(&csv_text).expect("ingest");

    assert_eq!(summary.incidents.len(), 1);
    assert_eq!(summary.skipped_rows, 1);
    assert!(summary
        .warnings
        .iter()
        .any(|w| w.code == "INGEST_CSV_ROW_TOO_SHORT"));
}

#[test]
fn lenient_rule_accepts_number_or_description_alone() {
    let csv_text = format!(
        "{HEADER}INC0004,,,,,,,,,,,,,,\n,\"Description only\",,,,,,,,,,,,,\n,,,,,,,,,,,,,,\n"
    );
    let summary = ingest_incident_csv(&csv_text).expect("ingest");

    assert_eq!(summary.parsed_rows, 3);
    assert_eq!(summary.incidents.len(), 2);
    assert_eq!(summary.removed_invalid, 1);
    assert!(summary
        .warnings
        .iter()
        .any(|w| w.code == "INGEST_INCIDENT_REJECTED"));
}

#[test]
fn file_without_data_rows_is_an_error() {
    let err = ingest_incident_csv(HEADER).unwrap_err();
    assert_eq!(err.code, "INGEST_CSV_EMPTY");

    let err = ingest_incident_csv("").unwrap_err();
    assert_eq!(err.code, "INGEST_CSV_EMPTY");
}

#[test]
fn file_with_only_invalid_rows_is_an_error() {
    let csv_text = format!("{HEADER},,,,,,,,,,,,,,\n,,,,,,,,,,,,,,\n");
    let err = ingest_incident_csv(&csv_text).unwrap_err();
    assert_eq!(err.code, "INGEST_NO_VALID_INCIDENTS");
}

#[test]
fn marker_csv_assigns_row_ids_and_keeps_descriptions() {
    let csv_text = "string,description\nInterface,UI issues\nFatura,\n";
    let summary = ingest_marker_csv(csv_text).expect("ingest");

    assert_eq!(summary.markers.len(), 2);
    assert_eq!(summary.markers[0].id, "string_1");
    assert_eq!(summary.markers[0].string, "Interface");
    assert_eq!(summary.markers[0].description.as_deref(), Some("UI issues"));
    assert_eq!(summary.markers[1].id, "string_2");
    assert_eq!(summary.markers[1].description, None);
}

#[test]
fn marker_duplicates_collapse_case_insensitively() {
    let csv_text = "string\nInterface\ninterface\n INTERFACE \nFatura\n";
    let summary = ingest_marker_csv(csv_text).expect("ingest");

    let strings: Vec<&str> = summary.markers.iter().map(|m| m.string.as_str()).collect();
    assert_eq!(strings, vec!["Interface", "Fatura"]);
    assert_eq!(summary.removed_duplicates, 2);
}

#[test]
fn empty_marker_rows_are_removed() {
    let csv_text = "string\n\u{20}\nValid\n";
    let summary = ingest_marker_csv(csv_text).expect("ingest");
    assert_eq!(summary.markers.len(), 1);
    assert_eq!(summary.removed_invalid, 1);
}
