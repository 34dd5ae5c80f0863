use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::domain::{Incident, ValidationWarning};
use crate::error::AppError;
use crate::validate::clean_incidents;

/// Rows with fewer fields than this are skipped as structurally unusable.
const MIN_FIELDS: usize = 10;

/// Only the first few skipped rows get individual warnings; the summary
/// counters carry the full picture.
const MAX_ROW_WARNINGS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentIngestSummary {
    pub incidents: Vec<Incident>,
    pub parsed_rows: usize,
    pub skipped_rows: usize,
    pub removed_invalid: usize,
    pub warnings: Vec<ValidationWarning>,
}

fn cell(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

/// Ingest an incident export: header row plus positionally-mapped data rows.
///
/// Column order: number, short_description, caller, state, category,
/// assignment_group, assigned_to, priority, closed, opened, updated,
/// resolved, updated_by_tags; comments_and_work_notes comes from column 14
/// with a fallback to column 13 when 14 is absent or empty.
///
/// Rows shorter than [`MIN_FIELDS`] are skipped and counted. Surviving rows
/// go through the lenient validator (identifier OR short description); a file
/// that yields no usable record at all is an error rather than a silent empty
/// dataset.
pub fn ingest_incident_csv(csv_text: &str) -> Result<IncidentIngestSummary, AppError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    rdr.headers().map_err(|e| {
        AppError::new("INGEST_CSV_HEADERS_FAILED", "Failed to read CSV header row")
            .with_details(e.to_string())
    })?;

    let mut warnings = Vec::new();
    let mut rows = Vec::new();
    let mut skipped_rows = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                skipped_rows += 1;
                if skipped_rows <= MAX_ROW_WARNINGS {
                    warnings.push(
                        ValidationWarning::new(
                            "INGEST_CSV_ROW_UNREADABLE",
                            format!("Skipped unreadable row {}", idx + 2),
                        )
                        .with_details(e.to_string()),
                    );
                }
                continue;
            }
        };
        if record.len() < MIN_FIELDS {
            skipped_rows += 1;
            if skipped_rows <= MAX_ROW_WARNINGS {
                warnings.push(ValidationWarning::new(
                    "INGEST_CSV_ROW_TOO_SHORT",
                    format!("Skipped row {} with {} fields", idx + 2, record.len()),
                ));
            }
            continue;
        }

        let comments = {
            let primary = cell(&record, 14);
            if primary.is_empty() {
                cell(&record, 13)
            } else {
                primary
            }
        };
        rows.push(Incident {
            number: cell(&record, 0),
            short_description: cell(&record, 1),
            caller: cell(&record, 2),
            state: cell(&record, 3),
            category: cell(&record, 4),
            assignment_group: cell(&record, 5),
            assigned_to: cell(&record, 6),
            priority: cell(&record, 7),
            closed: cell(&record, 8),
            opened: cell(&record, 9),
            updated: cell(&record, 10),
            resolved: cell(&record, 11),
            updated_by_tags: cell(&record, 12),
            comments_and_work_notes: comments,
        });
    }

    if rows.is_empty() && skipped_rows == 0 {
        return Err(AppError::new(
            "INGEST_CSV_EMPTY",
            "File must contain a header row and at least one data row",
        ));
    }

    let parsed_rows = rows.len();
    let incidents = clean_incidents(rows);
    let removed_invalid = parsed_rows - incidents.len();
    if removed_invalid > 0 {
        warnings.push(ValidationWarning::new(
            "INGEST_INCIDENT_REJECTED",
            format!(
                "{removed_invalid} records removed: neither identifier nor short description present"
            ),
        ));
    }
    if incidents.is_empty() {
        return Err(AppError::new(
            "INGEST_NO_VALID_INCIDENTS",
            "No valid incidents found in file",
        ));
    }

    Ok(IncidentIngestSummary {
        incidents,
        parsed_rows,
        skipped_rows,
        removed_invalid,
        warnings,
    })
}
