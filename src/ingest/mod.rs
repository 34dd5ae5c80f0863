pub mod incident_csv;
pub mod marker_csv;
