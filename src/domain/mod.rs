use serde::{Deserialize, Serialize};

/// One support ticket as loaded from a CSV/Excel export.
///
/// Every field is raw free text. The four date fields keep the exact string
/// from the source file; formats are inconsistent per row, so parsing happens
/// on demand (`normalize::dates`) and never at ingestion. Records are created
/// in bulk on upload, replaced wholesale on a new upload, and never mutated
/// field-by-field.
///
/// `number` is treated as unique for selection membership, but nothing
/// enforces that; duplicates degrade to duplicate rows, not wrong counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub number: String,
    pub short_description: String,
    pub caller: String,
    pub state: String,
    pub category: String,
    pub assignment_group: String,
    pub assigned_to: String,
    pub priority: String,
    pub closed: String,
    pub opened: String,
    pub updated: String,
    pub resolved: String,
    pub updated_by_tags: String,
    pub comments_and_work_notes: String,
}

/// One configured keyword. `string` is matched against incidents as a
/// case-insensitive substring; `id` is a stable key assigned at
/// creation/import time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerSelection {
    pub id: String,
    pub string: String,
    pub description: Option<String>,
}

/// Non-fatal data-quality finding accumulated in ingest/validation summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

const MARKER_SEED: &[&str] = &[
    "Interface",
    "Authentication failure",
    "Cadastro",
    "Lentidão",
    "CPI",
    "API connection",
    "Replication",
    "Difal",
    "valor",
    "validação fiscal",
    "CTE",
    "Imposto",
    "Miro",
    "Fatura",
];

/// Default marker set present at first run, before any import replaces it.
pub fn default_markers() -> Vec<MarkerSelection> {
    MARKER_SEED
        .iter()
        .enumerate()
        .map(|(idx, s)| MarkerSelection {
            id: (idx + 1).to_string(),
            string: (*s).to_string(),
            description: None,
        })
        .collect()
}
