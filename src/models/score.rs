use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A symptom severity on the 0..=10 scale used by every slider of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> AppResult<Self> {
        if value > Self::MAX {
            return Err(AppError::InvalidScore(value as i64));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for Score {
    type Error = AppError;

    fn try_from(v: i64) -> AppResult<Self> {
        if !(Self::MIN as i64..=Self::MAX as i64).contains(&v) {
            return Err(AppError::InvalidScore(v));
        }
        Ok(Self(v as u8))
    }
}

impl From<Score> for u8 {
    fn from(s: Score) -> u8 {
        s.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
