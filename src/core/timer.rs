//! Contraction stopwatch.
//!
//! Two phases: `Idle` and `Counting`. Every transition has an `_at(now)`
//! form taking the current time explicitly, plus a convenience form reading
//! the local clock. Elapsed time is a plain query; callers poll it on their
//! own cadence.

use crate::models::interval::ContractionInterval;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Counting { start: DateTime<Local> },
}

#[derive(Debug)]
pub struct ContractionTimer {
    phase: Phase,
    history: Vec<ContractionInterval>,
}

impl Default for ContractionTimer {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            history: Vec::new(),
        }
    }
}

/// Seconds between two instants, rounded to one decimal. A clock stepping
/// backwards is clamped to zero.
pub fn seconds_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    let ms = (end - start).num_milliseconds().max(0);
    (ms as f64 / 100.0).round() / 10.0
}

impl ContractionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.phase, Phase::Counting { .. })
    }

    /// Completed intervals, most recent first.
    pub fn history(&self) -> &[ContractionInterval] {
        &self.history
    }

    pub fn start(&mut self) -> bool {
        self.start_at(Local::now())
    }

    /// Begin counting. Ignored while already counting: the first start
    /// time is kept and `false` is returned.
    pub fn start_at(&mut self, now: DateTime<Local>) -> bool {
        if self.is_counting() {
            return false;
        }
        self.phase = Phase::Counting { start: now };
        true
    }

    pub fn stop(&mut self) -> Option<&ContractionInterval> {
        self.stop_at(Local::now())
    }

    /// Close the running interval and record it at the top of the history.
    /// Does nothing while idle.
    pub fn stop_at(&mut self, now: DateTime<Local>) -> Option<&ContractionInterval> {
        let Phase::Counting { start } = self.phase else {
            return None;
        };

        self.history.insert(
            0,
            ContractionInterval {
                start,
                end: now,
                duration_seconds: seconds_between(start, now),
            },
        );
        self.phase = Phase::Idle;
        self.history.first()
    }

    pub fn elapsed(&self) -> Option<f64> {
        self.elapsed_at(Local::now())
    }

    /// Seconds since the running interval started, `None` while idle.
    pub fn elapsed_at(&self, now: DateTime<Local>) -> Option<f64> {
        match self.phase {
            Phase::Counting { start } => Some(seconds_between(start, now)),
            Phase::Idle => None,
        }
    }

    /// Drop the whole history and any running interval.
    pub fn reset(&mut self) {
        self.history.clear();
        self.phase = Phase::Idle;
    }
}
