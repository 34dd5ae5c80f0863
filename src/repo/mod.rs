use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{default_markers, MarkerSelection};
use crate::error::AppError;
use crate::validate::{clean_markers, dedup_markers};

/// Persistence seam for the configured marker list.
///
/// The analytics core never calls this itself; the hosting layer loads the
/// list at startup and saves it after edits, passing the result into the pure
/// aggregation functions as a plain argument.
pub trait MarkerRepository {
    fn load(&self) -> Result<Vec<MarkerSelection>, AppError>;
    fn save(&self, markers: &[MarkerSelection]) -> Result<(), AppError>;
}

/// Stores the marker list as a JSON file. A missing file, a corrupted file,
/// or a saved list that cleans down to nothing all load the default seed set,
/// so the dashboard always starts with usable markers.
pub struct JsonFileMarkerRepository {
    path: PathBuf,
}

impl JsonFileMarkerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MarkerRepository for JsonFileMarkerRepository {
    fn load(&self) -> Result<Vec<MarkerSelection>, AppError> {
        if !self.path.exists() {
            return Ok(default_markers());
        }
        let text = fs::read_to_string(&self.path).map_err(|e| {
            AppError::new("MARKER_STORE_READ_FAILED", "Failed to read marker store")
                .with_details(e.to_string())
                .with_retryable(true)
        })?;
        let parsed: Vec<MarkerSelection> = match serde_json::from_str(&text) {
            Ok(list) => list,
            Err(_) => return Ok(default_markers()),
        };
        let markers = dedup_markers(clean_markers(parsed));
        if markers.is_empty() {
            return Ok(default_markers());
        }
        Ok(markers)
    }

    fn save(&self, markers: &[MarkerSelection]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(markers).map_err(|e| {
            AppError::new("MARKER_STORE_ENCODE_FAILED", "Failed to encode marker store")
                .with_details(e.to_string())
        })?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::new("MARKER_STORE_WRITE_FAILED", "Failed to write marker store")
                .with_details(e.to_string())
                .with_retryable(true)
        })?;
        Ok(())
    }
}
