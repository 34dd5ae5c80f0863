use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::domain::{MarkerSelection, ValidationWarning};
use crate::error::AppError;
use crate::validate::{clean_markers, dedup_markers};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerIngestSummary {
    pub markers: Vec<MarkerSelection>,
    pub parsed_rows: usize,
    pub removed_invalid: usize,
    pub removed_duplicates: usize,
    pub warnings: Vec<ValidationWarning>,
}

/// Ingest a marker list: one marker per row, text in the first column and an
/// optional description in the second. The result is meant to fully replace
/// any existing list, so ids are row-index based and duplicates (by
/// case-insensitive text) are collapsed to the first occurrence.
pub fn ingest_marker_csv(csv_text: &str) -> Result<MarkerIngestSummary, AppError> {
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

    for (idx, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warnings.push(
                    ValidationWarning::new(
                        "INGEST_CSV_ROW_UNREADABLE",
                        format!("Skipped unreadable row {}", idx + 2),
                    )
                    .with_details(e.to_string()),
                );
                continue;
            }
        };
        let string = record.get(0).unwrap_or("").trim().to_string();
        let description = record
            .get(1)
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        rows.push(MarkerSelection {
            id: format!("string_{}", idx + 1),
            string,
            description,
        });
    }

    if rows.is_empty() {
        return Err(AppError::new(
            "INGEST_CSV_EMPTY",
            "File must contain a header row and at least one data row",
        ));
    }

    let parsed_rows = rows.len();
    let cleaned = clean_markers(rows);
    let removed_invalid = parsed_rows - cleaned.len();
    let markers = dedup_markers(cleaned);
    let removed_duplicates = parsed_rows - removed_invalid - markers.len();

    if removed_invalid > 0 {
        warnings.push(ValidationWarning::new(
            "INGEST_MARKER_REJECTED",
            format!("{removed_invalid} markers removed: empty marker text"),
        ));
    }
    if removed_duplicates > 0 {
        warnings.push(ValidationWarning::new(
            "INGEST_MARKER_DUPLICATE",
            format!("{removed_duplicates} duplicate markers collapsed"),
        ));
    }
    if markers.is_empty() {
        return Err(AppError::new(
            "INGEST_NO_VALID_MARKERS",
            "No valid markers found in file",
        ));
    }

    Ok(MarkerIngestSummary {
        markers,
        parsed_rows,
        removed_invalid,
        removed_duplicates,
        warnings,
    })
}
