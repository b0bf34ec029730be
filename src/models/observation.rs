use super::{contractions::Contractions, moment::Moment, score::Score};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the symptom log.
///
/// Serde names follow the (French) column headers of the persisted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "Date")]
    pub date: NaiveDate, // ⇔ Date (TEXT "YYYY-MM-DD")
    #[serde(rename = "Moment")]
    pub moment: Moment, // ⇔ Moment ("Matin" | "Soir")
    #[serde(rename = "Fatigue")]
    pub fatigue: Score,
    #[serde(rename = "Douleurs")]
    pub pain: Score,
    #[serde(rename = "Nausees")]
    pub nausea: Score,
    #[serde(rename = "Maux_de_tete")]
    pub headache: Score,
    #[serde(rename = "RGO")]
    pub reflux: Score,
    #[serde(rename = "Sommeil")]
    pub sleep: Score, // higher is better
    #[serde(rename = "Humeur")]
    pub mood: Score, // higher is better
    #[serde(rename = "Contractions")]
    pub contractions: Contractions,
    #[serde(rename = "Remarques")]
    pub notes: Option<String>,
}

impl Observation {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// The five "higher is worse" scores, in column order.
    pub fn severities(&self) -> [Score; 5] {
        [
            self.fatigue,
            self.pain,
            self.nausea,
            self.headache,
            self.reflux,
        ]
    }
}
