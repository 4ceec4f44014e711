//! Time entry model
//!
//! A `TimeEntry` is one ledger row for a resource on a date. A row either
//! references a task ("task entry") or represents a whole-day status
//! ("day entry") - never both. Hour quantities are fixed-point decimals;
//! zero means the field carries no hours.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::leave::SpecialLeaveReason;

/// Identifier of a persisted time entry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a fresh identifier for a new row.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a resource (employee/contractor) whose time is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub i64);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a trackable task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A timesheet entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntryId,
    pub resource_id: ResourceId,
    pub date: NaiveDate,
    /// Non-null makes this a task entry; null makes it a day entry.
    pub task: Option<TaskId>,

    // Task-only hour quantities
    pub day_shift: Decimal,
    pub night_shift: Decimal,
    pub on_call: Decimal,
    pub travel: Decimal,

    // Day-only hour quantities
    pub sick: Decimal,
    pub holiday: Decimal,
    pub leave: Decimal,
    pub special_leave: Decimal,
    pub rest: Decimal,

    // Bank-hours ledger movement
    pub bank_from: Decimal,
    pub bank_to: Decimal,

    pub special_leave_reason: Option<SpecialLeaveReason>,
    pub comment: Option<String>,
    /// Sick-leave reference code.
    pub protocol_number: Option<String>,
}

impl TimeEntry {
    /// Create an empty day entry (no task reference, all hours zero).
    pub fn day_entry(resource_id: ResourceId, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(),
            resource_id,
            date,
            task: None,
            day_shift: Decimal::ZERO,
            night_shift: Decimal::ZERO,
            on_call: Decimal::ZERO,
            travel: Decimal::ZERO,
            sick: Decimal::ZERO,
            holiday: Decimal::ZERO,
            leave: Decimal::ZERO,
            special_leave: Decimal::ZERO,
            rest: Decimal::ZERO,
            bank_from: Decimal::ZERO,
            bank_to: Decimal::ZERO,
            special_leave_reason: None,
            comment: None,
            protocol_number: None,
        }
    }

    /// Create an empty task entry for the given task.
    pub fn task_entry(resource_id: ResourceId, date: NaiveDate, task: TaskId) -> Self {
        Self { task: Some(task), ..Self::day_entry(resource_id, date) }
    }

    /// Total task-related hours logged on this entry.
    pub fn total_task_hours(&self) -> Decimal {
        self.day_shift + self.night_shift + self.travel
    }

    /// Grand total of all hours logged on this entry, absences included.
    pub fn total_hours(&self) -> Decimal {
        self.total_task_hours() + self.leave + self.special_leave + self.sick + self.holiday + self.rest
    }

    /// Total absence hours (sick, holiday, regular and special leave).
    ///
    /// Rest is tracked separately and is not an absence in this sense.
    pub fn absence_hours(&self) -> Decimal {
        self.leave + self.special_leave + self.sick + self.holiday
    }

    /// Net bank-hours movement carried by this entry.
    pub fn bank_delta(&self) -> Decimal {
        self.bank_to - self.bank_from
    }

    pub fn has_bank_movement(&self) -> bool {
        self.bank_from > Decimal::ZERO || self.bank_to > Decimal::ZERO
    }

    pub fn is_day_entry(&self) -> bool {
        self.task.is_none()
    }

    pub fn is_task_entry(&self) -> bool {
        self.task.is_some()
    }

    pub fn is_sick_day(&self) -> bool {
        self.sick > Decimal::ZERO
    }

    pub fn is_holiday(&self) -> bool {
        self.holiday > Decimal::ZERO
    }

    pub fn is_leave(&self) -> bool {
        self.leave > Decimal::ZERO
    }

    pub fn is_rest(&self) -> bool {
        self.rest > Decimal::ZERO
    }

    pub fn is_special_leave(&self) -> bool {
        self.special_leave > Decimal::ZERO && self.special_leave_reason.is_some()
    }

    /// Whether any day-entry hour field is populated.
    pub fn has_day_entry_hours(&self) -> bool {
        self.is_sick_day()
            || self.is_holiday()
            || self.is_leave()
            || self.is_special_leave()
            || self.is_rest()
    }

    /// Whether any task-entry hour field is populated.
    pub fn has_task_entry_hours(&self) -> bool {
        self.total_task_hours() > Decimal::ZERO || self.on_call > Decimal::ZERO
    }

    /// Leave and rest entries forbid working overtime on the same day.
    pub fn prevents_overtime_on_same_day(&self) -> bool {
        self.is_leave() || self.is_special_leave() || self.is_rest()
    }
}

impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.task {
            Some(task) => write!(f, "{}: resource {} on task {}", self.date, self.resource_id, task),
            None => write!(f, "{}: resource {} (day entry)", self.date, self.resource_id),
        }
    }
}
