use crate::models::advisory::Advisory;
use crate::models::observation::Observation;
use serde::Serialize;

/// Metrics shown for the latest observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub fatigue: u8,
    pub pain: u8,
    pub nausea: u8,
    pub headache: u8,
    pub reflux: u8,
    pub wellness: f64,
}

/// Global wellness index: 10 minus the mean of the five "higher is worse"
/// scores. Stays within 0..=10 because every score does.
pub fn wellness(obs: &Observation) -> f64 {
    let total: u32 = obs.severities().iter().map(|s| s.value() as u32).sum();
    10.0 - total as f64 / 5.0
}

pub fn summarize(obs: &Observation) -> Summary {
    Summary {
        fatigue: obs.fatigue.value(),
        pain: obs.pain.value(),
        nausea: obs.nausea.value(),
        headache: obs.headache.value(),
        reflux: obs.reflux.value(),
        wellness: wellness(obs),
    }
}

/// Pick the advice for an observation. Rules are checked in order and the
/// first match wins.
pub fn advise(obs: &Observation) -> Advisory {
    if obs.pain.value() >= 8 || obs.contractions.is_regular() {
        Advisory::SeekCare
    } else if obs.fatigue.value() > 7 && obs.nausea.value() > 7 {
        Advisory::FatigueNausea
    } else if obs.headache.value() > 8 || obs.reflux.value() > 8 {
        Advisory::HeadacheReflux
    } else {
        Advisory::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::advisory::AdvisoryLevel;
    use crate::models::contractions::Contractions;
    use crate::models::moment::Moment;
    use crate::models::score::Score;
    use chrono::NaiveDate;

    fn obs(scores: [u8; 5], contractions: Contractions) -> Observation {
        let s = |v| Score::new(v).unwrap();
        Observation {
            date: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            moment: Moment::Morning,
            fatigue: s(scores[0]),
            pain: s(scores[1]),
            nausea: s(scores[2]),
            headache: s(scores[3]),
            reflux: s(scores[4]),
            sleep: s(6),
            mood: s(7),
            contractions,
            notes: None,
        }
    }

    #[test]
    fn wellness_from_form_defaults() {
        let o = obs([5, 3, 2, 2, 2], Contractions::None);
        assert!((wellness(&o) - 7.2).abs() < 1e-9);

        let s = summarize(&o);
        assert_eq!(s.fatigue, 5);
        assert_eq!(s.pain, 3);
        assert_eq!(s.nausea, 2);
    }

    #[test]
    fn wellness_bounds() {
        assert_eq!(wellness(&obs([0; 5], Contractions::None)), 10.0);
        assert_eq!(wellness(&obs([10; 5], Contractions::None)), 0.0);
    }

    #[test]
    fn urgent_wins_over_fatigue_nausea() {
        let o = obs([9, 9, 9, 0, 0], Contractions::None);
        assert_eq!(advise(&o), Advisory::SeekCare);
        assert_eq!(advise(&o).level(), AdvisoryLevel::Urgent);
    }

    #[test]
    fn regular_contractions_are_urgent() {
        let o = obs([0, 0, 0, 0, 0], Contractions::Regular);
        assert_eq!(advise(&o), Advisory::SeekCare);
    }

    #[test]
    fn pain_threshold_is_inclusive() {
        assert_eq!(advise(&obs([0, 8, 0, 0, 0], Contractions::None)), Advisory::SeekCare);
        assert_eq!(advise(&obs([0, 7, 0, 0, 0], Contractions::Mild)), Advisory::Normal);
    }

    #[test]
    fn fatigue_and_nausea_warning() {
        let o = obs([8, 0, 8, 0, 0], Contractions::None);
        assert_eq!(advise(&o), Advisory::FatigueNausea);
        assert_eq!(advise(&o).level(), AdvisoryLevel::Warning);

        // both must exceed 7
        assert_eq!(advise(&obs([8, 0, 7, 0, 0], Contractions::None)), Advisory::Normal);
    }

    #[test]
    fn headache_or_reflux_warning() {
        assert_eq!(
            advise(&obs([0, 0, 0, 9, 0], Contractions::None)),
            Advisory::HeadacheReflux
        );
        assert_eq!(
            advise(&obs([0, 0, 0, 0, 9], Contractions::None)),
            Advisory::HeadacheReflux
        );
        assert_eq!(advise(&obs([0, 0, 0, 8, 8], Contractions::None)), Advisory::Normal);
    }

    #[test]
    fn fatigue_nausea_checked_before_headache() {
        let o = obs([9, 0, 9, 10, 10], Contractions::None);
        assert_eq!(advise(&o), Advisory::FatigueNausea);
    }

    #[test]
    fn low_scores_are_normal() {
        let o = obs([5, 5, 5, 5, 5], Contractions::None);
        assert_eq!(advise(&o), Advisory::Normal);
        assert_eq!(advise(&o).level(), AdvisoryLevel::Normal);
    }
}
