//! Month filtering and chart series over the observation table.

use crate::models::month::YearMonth;
use crate::models::observation::Observation;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// The five plotted symptoms for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomPoint {
    pub fatigue: u8,
    pub pain: u8,
    pub nausea: u8,
    pub headache: u8,
    pub reflux: u8,
}

impl SymptomPoint {
    pub fn values(&self) -> [u8; 5] {
        [
            self.fatigue,
            self.pain,
            self.nausea,
            self.headache,
            self.reflux,
        ]
    }
}

pub const SERIES_LABELS: [&str; 5] = ["Fatigue", "Pain", "Nausea", "Headache", "Reflux"];

/// Rows whose date falls in `month`, in table order.
pub fn filter_by_month(rows: &[Observation], month: YearMonth) -> Vec<Observation> {
    rows.iter()
        .filter(|o| month.contains(&o.date))
        .cloned()
        .collect()
}

/// Distinct months present in the table, oldest first.
pub fn available_months(rows: &[Observation]) -> Vec<YearMonth> {
    rows.iter()
        .map(|o| YearMonth::of(&o.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Most recent month present in the table, if any.
pub fn default_month(rows: &[Observation]) -> Option<YearMonth> {
    available_months(rows).pop()
}

/// Use `requested` when given, otherwise fall back to the most recent month.
pub fn resolve_month(rows: &[Observation], requested: Option<YearMonth>) -> Option<YearMonth> {
    requested.or_else(|| default_month(rows))
}

/// Chart series in the order the rows are stored (no sorting).
pub fn chart_series(rows: &[Observation]) -> Vec<(NaiveDate, SymptomPoint)> {
    rows.iter()
        .map(|o| {
            (
                o.date,
                SymptomPoint {
                    fatigue: o.fatigue.value(),
                    pain: o.pain.value(),
                    nausea: o.nausea.value(),
                    headache: o.headache.value(),
                    reflux: o.reflux.value(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contractions::Contractions;
    use crate::models::moment::Moment;
    use crate::models::score::Score;

    fn obs(date: &str, fatigue: u8) -> Observation {
        let s = |v| Score::new(v).unwrap();
        Observation {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            moment: Moment::Morning,
            fatigue: s(fatigue),
            pain: s(1),
            nausea: s(2),
            headache: s(3),
            reflux: s(4),
            sleep: s(5),
            mood: s(6),
            contractions: Contractions::None,
            notes: None,
        }
    }

    #[test]
    fn filters_single_month() {
        let rows = vec![obs("2025-10-05", 1), obs("2025-11-02", 2)];
        let oct: YearMonth = "2025-10".parse().unwrap();

        let filtered = filter_by_month(&rows, oct);
        assert_eq!(filtered, vec![rows[0].clone()]);
    }

    #[test]
    fn months_are_distinct_and_sorted() {
        let rows = vec![
            obs("2025-11-02", 1),
            obs("2025-10-05", 1),
            obs("2025-11-20", 1),
            obs("2024-12-31", 1),
        ];

        let months: Vec<String> = available_months(&rows).iter().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2024-12", "2025-10", "2025-11"]);
        assert_eq!(default_month(&rows).unwrap().to_string(), "2025-11");
    }

    #[test]
    fn no_rows_no_default_month() {
        assert!(default_month(&[]).is_none());
        assert!(resolve_month(&[], None).is_none());
    }

    #[test]
    fn explicit_month_wins() {
        let rows = vec![obs("2025-11-02", 1)];
        let oct: YearMonth = "2025-10".parse().unwrap();
        assert_eq!(resolve_month(&rows, Some(oct)), Some(oct));
    }

    #[test]
    fn series_keeps_table_order() {
        let rows = vec![obs("2025-10-20", 7), obs("2025-10-05", 3)];
        let series = chart_series(&rows);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0.to_string(), "2025-10-20");
        assert_eq!(series[0].1.fatigue, 7);
        assert_eq!(series[1].1.values(), [3, 1, 2, 3, 4]);
    }
}
