//! Schedule resolution
//!
//! Answers two questions for a resource and a date: how many hours are due,
//! and whether the date is a holiday. Pure lookup, no mutation.

mod calendar;
mod resolver;

pub use calendar::{FixedHolidayCalendar, HolidayCalendar, WeekendCalendar};
pub use resolver::ScheduleResolver;
