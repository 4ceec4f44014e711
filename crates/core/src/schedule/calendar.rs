//! Holiday calendars

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// Trait answering whether a date is a holiday.
///
/// Implementations must be cheap and side-effect-free; the resolver may
/// call them repeatedly for the same date.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Calendar treating Saturdays and Sundays as holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl HolidayCalendar for WeekendCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Calendar built from an explicit set of holiday dates.
#[derive(Debug, Clone, Default)]
pub struct FixedHolidayCalendar {
    holidays: HashSet<NaiveDate>,
    include_weekends: bool,
}

impl FixedHolidayCalendar {
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self { holidays: holidays.into_iter().collect(), include_weekends: false }
    }

    /// Also treat Saturdays and Sundays as holidays.
    pub fn with_weekends(mut self) -> Self {
        self.include_weekends = true;
        self
    }
}

impl HolidayCalendar for FixedHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        if self.include_weekends && WeekendCalendar.is_holiday(date) {
            return true;
        }
        self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekend_calendar_flags_saturday_and_sunday() {
        assert!(WeekendCalendar.is_holiday(day(2025, 7, 5)));
        assert!(WeekendCalendar.is_holiday(day(2025, 7, 6)));
        assert!(!WeekendCalendar.is_holiday(day(2025, 7, 7)));
    }

    #[test]
    fn fixed_calendar_only_knows_its_dates() {
        let calendar = FixedHolidayCalendar::new([day(2025, 12, 25)]);
        assert!(calendar.is_holiday(day(2025, 12, 25)));
        // A Saturday, but weekends are not included
        assert!(!calendar.is_holiday(day(2025, 7, 5)));

        let calendar = calendar.with_weekends();
        assert!(calendar.is_holiday(day(2025, 7, 5)));
    }
}
