//! The validated number of days to forecast.

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A forecast horizon in days, guaranteed to lie in `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayCount(u8);

impl DayCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;

    /// Validate an already-parsed integer.
    pub fn new(days: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&days) {
            Ok(Self(days as u8))
        } else {
            Err(ValidationError::OutOfRange(days))
        }
    }

    /// Validate raw text from the day-count input.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a plain base-10
    /// integer (`"7.5"`, `"7abc"`, `"1e1"`) is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        let days = trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::NotAnInteger(trimmed.to_string()))?;
        Self::new(days)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for DayCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// JSON body of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    pub days: DayCount,
}
