use chrono::{DateTime, Local};
use serde::Serialize;

/// A completed contraction, from the moment it was started to the moment it
/// was stopped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractionInterval {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub duration_seconds: f64,
}

impl ContractionInterval {
    pub fn start_str(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M:%S").to_string()
    }
}
