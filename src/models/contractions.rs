use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Contractions felt during the observed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Contractions {
    #[default]
    #[serde(rename = "Non", alias = "None", alias = "none")]
    #[value(alias = "non")]
    None,
    #[serde(rename = "Légères", alias = "Mild", alias = "mild")]
    #[value(alias = "legeres")]
    Mild,
    #[serde(rename = "Régulières", alias = "Regular", alias = "regular")]
    #[value(alias = "regulieres")]
    Regular,
}

impl Contractions {
    pub fn label(&self) -> &'static str {
        match self {
            Contractions::None => "None",
            Contractions::Mild => "Mild",
            Contractions::Regular => "Regular",
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, Contractions::Regular)
    }
}
