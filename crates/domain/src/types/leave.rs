//! Special-leave reasons
//!
//! A special leave must reference a named reason which may only be valid
//! inside a date window. Either bound of the window can be open.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TimecardError};

/// A reason for special leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialLeaveReason {
    pub id: i64,
    pub title: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl SpecialLeaveReason {
    /// Create a reason with a validity window.
    ///
    /// Rejects windows where `from_date` is later than `to_date`.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Self> {
        if let (Some(from), Some(to)) = (from_date, to_date) {
            if from > to {
                return Err(TimecardError::InvalidInput(format!(
                    "special leave reason window is inverted: {from} > {to}"
                )));
            }
        }
        Ok(Self { id, title: title.into(), from_date, to_date })
    }

    /// Create a reason valid on any date.
    pub fn open_ended(id: i64, title: impl Into<String>) -> Self {
        Self { id, title: title.into(), from_date: None, to_date: None }
    }

    pub fn is_not_valid_yet(&self, date: NaiveDate) -> bool {
        self.from_date.is_some_and(|from| date < from)
    }

    pub fn is_expired(&self, date: NaiveDate) -> bool {
        self.to_date.is_some_and(|to| date > to)
    }

    /// Whether the reason may be used on the given date.
    pub fn is_valid(&self, date: NaiveDate) -> bool {
        !self.is_not_valid_yet(date) && !self.is_expired(date)
    }
}

impl fmt::Display for SpecialLeaveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from_date, self.to_date) {
            (Some(from), Some(to)) => write!(f, "{} ({from} - {to})", self.title),
            (Some(from), None) => write!(f, "{} ({from} - ...)", self.title),
            (None, Some(to)) => write!(f, "{} (... - {to})", self.title),
            (None, None) => write!(f, "{}", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_ended_reason_is_always_valid() {
        let reason = SpecialLeaveReason::open_ended(1, "Blood donation");
        assert!(reason.is_valid(day(1990, 1, 1)));
        assert!(reason.is_valid(day(2100, 12, 31)));
    }

    #[test]
    fn bounded_window_includes_both_ends() {
        let reason =
            SpecialLeaveReason::new(1, "Exam", Some(day(2025, 3, 1)), Some(day(2025, 3, 31)))
                .unwrap();
        assert!(!reason.is_valid(day(2025, 2, 28)));
        assert!(reason.is_valid(day(2025, 3, 1)));
        assert!(reason.is_valid(day(2025, 3, 31)));
        assert!(reason.is_expired(day(2025, 4, 1)));
    }

    #[test]
    fn half_open_windows() {
        let from_only = SpecialLeaveReason::new(1, "A", Some(day(2025, 1, 1)), None).unwrap();
        assert!(from_only.is_not_valid_yet(day(2024, 12, 31)));
        assert!(from_only.is_valid(day(2030, 1, 1)));

        let to_only = SpecialLeaveReason::new(2, "B", None, Some(day(2025, 1, 1))).unwrap();
        assert!(to_only.is_valid(day(2020, 6, 15)));
        assert!(!to_only.is_valid(day(2025, 1, 2)));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let result =
            SpecialLeaveReason::new(1, "Bad", Some(day(2025, 5, 1)), Some(day(2025, 4, 1)));
        assert!(result.is_err());
    }
}
