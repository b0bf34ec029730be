// src/export/model.rs

use crate::core::summary::{advise, wellness};
use crate::models::observation::Observation;
use serde::Serialize;

/// Flat, English-keyed view of an observation for CSV / JSON export.
/// Carries the derived wellness index and advisory level as well.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ObservationExport {
    pub date: String,
    pub moment: String,
    pub fatigue: u8,
    pub pain: u8,
    pub nausea: u8,
    pub headache: u8,
    pub reflux: u8,
    pub sleep: u8,
    pub mood: u8,
    pub contractions: String,
    pub notes: String,
    pub wellness: f64,
    pub advisory: String,
}

impl From<&Observation> for ObservationExport {
    fn from(o: &Observation) -> Self {
        Self {
            date: o.date_str(),
            moment: o.moment.label().to_string(),
            fatigue: o.fatigue.value(),
            pain: o.pain.value(),
            nausea: o.nausea.value(),
            headache: o.headache.value(),
            reflux: o.reflux.value(),
            sleep: o.sleep.value(),
            mood: o.mood.value(),
            contractions: o.contractions.label().to_string(),
            notes: o.notes.clone().unwrap_or_default(),
            wellness: (wellness(o) * 10.0).round() / 10.0,
            advisory: format!("{:?}", advise(o).level()),
        }
    }
}

pub(crate) fn to_export_rows(rows: &[Observation]) -> Vec<ObservationExport> {
    rows.iter().map(ObservationExport::from).collect()
}
