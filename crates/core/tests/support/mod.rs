//! Shared test support: in-memory port implementations and entry builders.

pub mod repositories;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use timecard_domain::{ResourceId, TaskId, TimeEntry};

pub const RESOURCE: ResourceId = ResourceId(1);

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A Friday on the default schedule (8 due hours).
pub fn friday() -> NaiveDate {
    day(2025, 7, 4)
}

pub fn task_entry(task: i64, date: NaiveDate, day_shift: Decimal) -> TimeEntry {
    let mut entry = TimeEntry::task_entry(RESOURCE, date, TaskId(task));
    entry.day_shift = day_shift;
    entry
}

pub fn sick_entry(date: NaiveDate, hours: Decimal, comment: Option<&str>) -> TimeEntry {
    let mut entry = TimeEntry::day_entry(RESOURCE, date);
    entry.sick = hours;
    entry.comment = comment.map(str::to_string);
    entry
}

pub fn deposit_entry(date: NaiveDate, hours: Decimal) -> TimeEntry {
    let mut entry = TimeEntry::day_entry(RESOURCE, date);
    entry.bank_to = hours;
    entry
}

pub fn withdrawal_entry(date: NaiveDate, hours: Decimal) -> TimeEntry {
    let mut entry = TimeEntry::day_entry(RESOURCE, date);
    entry.bank_from = hours;
    entry
}
