//! Weekly schedules and contracts
//!
//! A `WeeklySchedule` holds the expected working hours for each day of the
//! week. A `Contract` attaches a schedule to a resource over a half-open
//! validity period; outside any contract the engine falls back to a default
//! schedule.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WORKDAY_HOURS, MAX_HOURS_PER_DAY};
use crate::errors::{Result, TimecardError};
use crate::types::entry::ResourceId;

/// A weekly schedule in hours.
///
/// Index 0 is Monday, index 6 is Sunday, matching
/// `chrono::Datelike::weekday` numbering from Monday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    hours: [Decimal; 7],
    /// Whether scheduled hours apply even on holidays.
    pub allows_holidays: bool,
}

impl WeeklySchedule {
    /// Create a schedule, validating every slot is within `[0, 24]`.
    pub fn new(hours: [Decimal; 7]) -> Result<Self> {
        if hours.iter().any(|h| *h < Decimal::ZERO || *h > MAX_HOURS_PER_DAY) {
            return Err(TimecardError::Config(
                "all scheduled hours must be between 0 and 24".to_string(),
            ));
        }
        Ok(Self { hours, allows_holidays: false })
    }

    /// Mark the schedule as applying on holidays as well.
    pub fn with_holidays_allowed(mut self) -> Self {
        self.allows_holidays = true;
        self
    }

    /// Scheduled hours for the weekday of the given date.
    pub fn hours_for(&self, date: NaiveDate) -> Decimal {
        self.hours[date.weekday().num_days_from_monday() as usize]
    }
}

impl Default for WeeklySchedule {
    /// Eight hours Monday through Friday, weekends off.
    fn default() -> Self {
        let h = DEFAULT_WORKDAY_HOURS;
        Self {
            hours: [h, h, h, h, h, Decimal::ZERO, Decimal::ZERO],
            allows_holidays: false,
        }
    }
}

/// A work contract binding a resource to a schedule over a period.
///
/// The period is half-open: `from` is covered, `to` (when present) is the
/// first day no longer covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub resource_id: ResourceId,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub work_schedule: Option<WeeklySchedule>,
    /// Weekday thresholds above which a worked day earns a meal voucher.
    pub meal_voucher_thresholds: Option<WeeklySchedule>,
}

impl Contract {
    pub fn new(resource_id: ResourceId, from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self { resource_id, from, to, work_schedule: None, meal_voucher_thresholds: None }
    }

    pub fn with_schedule(mut self, schedule: WeeklySchedule) -> Self {
        self.work_schedule = Some(schedule);
        self
    }

    pub fn with_meal_voucher_thresholds(mut self, thresholds: WeeklySchedule) -> Self {
        self.meal_voucher_thresholds = Some(thresholds);
        self
    }

    /// Check if the provided day falls into the contract period.
    pub fn covers(&self, day: NaiveDate) -> bool {
        match self.to {
            Some(to) => self.from <= day && day < to,
            None => self.from <= day,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_schedule_is_eight_hours_on_weekdays() {
        let schedule = WeeklySchedule::default();
        // 2025-07-04 is a Friday, 2025-07-05 a Saturday
        assert_eq!(schedule.hours_for(day(2025, 7, 4)), dec!(8));
        assert_eq!(schedule.hours_for(day(2025, 7, 5)), Decimal::ZERO);
    }

    #[test]
    fn schedule_rejects_out_of_range_hours() {
        let mut hours = [Decimal::ZERO; 7];
        hours[0] = dec!(25);
        assert!(WeeklySchedule::new(hours).is_err());

        hours[0] = dec!(-1);
        assert!(WeeklySchedule::new(hours).is_err());
    }

    #[test]
    fn contract_period_is_half_open() {
        let contract =
            Contract::new(ResourceId(1), day(2025, 1, 1), Some(day(2025, 7, 1)));
        assert!(contract.covers(day(2025, 1, 1)));
        assert!(contract.covers(day(2025, 6, 30)));
        assert!(!contract.covers(day(2025, 7, 1)));
        assert!(!contract.covers(day(2024, 12, 31)));
    }

    #[test]
    fn open_ended_contract_covers_any_later_day() {
        let contract = Contract::new(ResourceId(1), day(2025, 1, 1), None);
        assert!(contract.covers(day(2030, 1, 1)));
        assert!(!contract.covers(day(2024, 12, 31)));
    }
}
