use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Moment of the day an observation refers to.
///
/// Stored in the CSV with French labels (`Matin` / `Soir`); English
/// spellings are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Moment {
    #[default]
    #[serde(rename = "Matin", alias = "Morning", alias = "morning")]
    #[value(alias = "matin")]
    Morning,
    #[serde(rename = "Soir", alias = "Evening", alias = "evening")]
    #[value(alias = "soir")]
    Evening,
}

impl Moment {
    pub fn label(&self) -> &'static str {
        match self {
            Moment::Morning => "Morning",
            Moment::Evening => "Evening",
        }
    }

    /// Helper: convert a user or config code (case-insensitive, FR or EN)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "matin" | "morning" | "m" => Some(Moment::Morning),
            "soir" | "evening" | "e" | "s" => Some(Moment::Evening),
            _ => None,
        }
    }
}
