use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdvisoryLevel {
    Normal,
    Warning,
    Urgent,
}

/// Advice produced for a single observation. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    /// Strong pain or regular contractions.
    SeekCare,
    /// Both fatigue and nausea are high.
    FatigueNausea,
    /// Intense headache or reflux.
    HeadacheReflux,
    Normal,
}

impl Advisory {
    pub fn level(&self) -> AdvisoryLevel {
        match self {
            Advisory::SeekCare => AdvisoryLevel::Urgent,
            Advisory::FatigueNausea | Advisory::HeadacheReflux => AdvisoryLevel::Warning,
            Advisory::Normal => AdvisoryLevel::Normal,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::SeekCare => {
                "Strong pain or regular contractions: contact a health professional promptly."
            }
            Advisory::FatigueNausea => "Significant fatigue and nausea: keep an eye on it and rest.",
            Advisory::HeadacheReflux => {
                "Intense symptoms (headache or reflux): keep an eye on it and tell your midwife."
            }
            Advisory::Normal => {
                "Everything looks normal today. Keep drinking water and resting."
            }
        }
    }
}
