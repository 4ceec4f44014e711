//! Entry validation rules
//!
//! Decides whether a candidate entry can be accepted given the other
//! entries on record for the same resource and date. Every rule is
//! evaluated; all violations are reported together so an interactive
//! caller can surface them at once.

use rust_decimal::Decimal;
use timecard_domain::constants::{MAX_DAY_SHIFT_HOURS, MAX_HOURS_PER_DAY, MAX_NIGHT_SHIFT_HOURS};
use timecard_domain::{EngineConfig, TimeEntry};

use super::violation::{ValidationOutcome, Violation, ViolationKind};
use super::{bank, supersession};

/// Schedule facts for the candidate's date, resolved up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayContext {
    pub due_hours: Decimal,
    pub is_holiday: bool,
}

/// The resource's bank-hours ledger position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankState {
    pub balance: Decimal,
}

/// Validates candidate time entries against the rule set.
pub struct EntryValidator {
    config: EngineConfig,
}

impl EntryValidator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Validate a candidate entry against its current siblings.
    ///
    /// Supersession is planned first so the ceiling checks run against
    /// the post-supersession sibling set. The returned deletions are not
    /// applied here; the caller persists them together with the entry.
    pub fn validate(
        &self,
        candidate: &TimeEntry,
        siblings: &[TimeEntry],
        day: &DayContext,
        bank: &BankState,
    ) -> ValidationOutcome {
        let to_delete = supersession::plan(candidate, siblings);
        let effective: Vec<&TimeEntry> = siblings
            .iter()
            .filter(|sibling| sibling.id != candidate.id && !to_delete.contains(&sibling.id))
            .collect();

        let mut violations = Vec::new();
        check_task_hours_not_in_day_entry(candidate, &mut violations);
        check_day_hours_not_in_task_entry(candidate, &mut violations);
        check_task_and_day_hours_not_together(candidate, &mut violations);
        check_at_most_one_absence(candidate, &mut violations);
        check_leave_regular_or_special(candidate, &mut violations);
        check_entry_ceiling(candidate, &mut violations);
        check_day_ceiling(candidate, &effective, &mut violations);
        check_sick_comment(candidate, &mut violations);
        check_special_leave_reason(candidate, &mut violations);
        self.check_no_overtime_with_leave_or_rest(candidate, &effective, &mut violations);
        bank::check(candidate, &effective, day, bank, &self.config, &mut violations);

        if violations.is_empty() {
            ValidationOutcome::Accepted { to_delete }
        } else {
            ValidationOutcome::Rejected { violations }
        }
    }

    /// Validate removing an entry from the ledger.
    ///
    /// Deleting a task entry must not leave the day's remaining task
    /// hours below the bank deposits already recorded for that day.
    pub fn validate_delete(&self, entry: &TimeEntry, siblings: &[TimeEntry]) -> ValidationOutcome {
        if entry.is_task_entry() {
            let remaining: Vec<&TimeEntry> =
                siblings.iter().filter(|sibling| sibling.id != entry.id).collect();
            let remaining_worked: Decimal =
                remaining.iter().map(|sibling| sibling.total_task_hours()).sum();
            let deposits: Decimal = remaining.iter().map(|sibling| sibling.bank_to).sum();

            if remaining_worked - deposits < Decimal::ZERO {
                return ValidationOutcome::Rejected {
                    violations: vec![Violation::new(
                        ViolationKind::Integrity,
                        "task_hours_below_deposits",
                        format!(
                            "Cannot delete this task entry. Remaining task hours ({:.2}) on {} \
                             would no longer cover the {:.2} bank hours already deposited.",
                            remaining_worked, entry.date, deposits
                        ),
                    )],
                };
            }
        }

        ValidationOutcome::Accepted { to_delete: vec![entry.id] }
    }

    /// Rule 7: no working overtime while a leave or rest entry is on
    /// record for the day.
    fn check_no_overtime_with_leave_or_rest(
        &self,
        candidate: &TimeEntry,
        effective: &[&TimeEntry],
        violations: &mut Vec<Violation>,
    ) {
        let blocking = candidate.prevents_overtime_on_same_day()
            || effective.iter().any(|sibling| sibling.prevents_overtime_on_same_day());
        if !blocking {
            return;
        }

        let total: Decimal =
            candidate.total_hours() + effective.iter().map(|s| s.total_hours()).sum::<Decimal>();
        if total > self.config.daily_work_hours_max {
            let resting = candidate.is_rest() || effective.iter().any(|s| s.is_rest());
            let kind = if resting { "rest" } else { "leave" };
            violations.push(Violation::new(
                ViolationKind::Ceiling,
                "overtime_while_resting_or_on_leave",
                format!(
                    "No overtime allowed when logging a {kind}. Maximum allowed is {}, got {}.",
                    self.config.daily_work_hours_max, total
                ),
            ));
        }
    }
}

/// Rule 1a: a day entry must not carry task-only hours.
fn check_task_hours_not_in_day_entry(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    if candidate.is_day_entry() && candidate.has_task_entry_hours() {
        violations.push(Violation::new(
            ViolationKind::Shape,
            "task_hours_in_day_entry",
            "You cannot log task hours in a day entry.",
        ));
    }
}

/// Rule 1b: a task entry must not carry day-only hours.
fn check_day_hours_not_in_task_entry(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    if candidate.is_task_entry() && candidate.has_day_entry_hours() {
        violations.push(Violation::new(
            ViolationKind::Shape,
            "day_hours_in_task_entry",
            "You cannot log non-task hours in a task entry.",
        ));
    }
}

/// Rule 1c: task hours and day hours never share a row.
fn check_task_and_day_hours_not_together(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    if candidate.has_task_entry_hours() && candidate.has_day_entry_hours() {
        violations.push(Violation::new(
            ViolationKind::Shape,
            "work_while_absent",
            "You cannot log task hours and non-task hours together.",
        ));
    }
}

/// Rule 2: at most one absence kind per day entry.
fn check_at_most_one_absence(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    let kinds = [
        candidate.sick > Decimal::ZERO,
        candidate.holiday > Decimal::ZERO,
        candidate.leave > Decimal::ZERO || candidate.special_leave > Decimal::ZERO,
    ];
    if kinds.iter().filter(|present| **present).count() > 1 {
        violations.push(Violation::new(
            ViolationKind::MutualExclusion,
            "multiple_absence_kind",
            "You cannot log more than one kind of non-task hours in a day.",
        ));
    }
}

/// Regular and special leave are mutually exclusive on one row.
fn check_leave_regular_or_special(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    if candidate.leave > Decimal::ZERO && candidate.special_leave > Decimal::ZERO {
        violations.push(Violation::new(
            ViolationKind::MutualExclusion,
            "regular_and_special_leave",
            "Cannot log hours on both regular and special leave.",
        ));
    }
}

/// Rule 3: the candidate alone must not exceed 24 hours.
fn check_entry_ceiling(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    let total = candidate.total_hours();
    if total > MAX_HOURS_PER_DAY {
        violations.push(Violation::new(
            ViolationKind::Ceiling,
            "too_much_total_time_logged",
            format!("Total hours on this time entry ({total}) is over 24 hours."),
        ));
    }
}

/// Rule 4: the day as a whole must not exceed 24 hours, and the day and
/// night shift fields have their own caps. All caps apply independently.
fn check_day_ceiling(
    candidate: &TimeEntry,
    effective: &[&TimeEntry],
    violations: &mut Vec<Violation>,
) {
    let total: Decimal =
        candidate.total_hours() + effective.iter().map(|s| s.total_hours()).sum::<Decimal>();
    if total > MAX_HOURS_PER_DAY {
        violations.push(Violation::new(
            ViolationKind::Ceiling,
            "too_much_total_time_logged",
            format!(
                "Total hours on all time entries on {} ({total}) is over 24 hours.",
                candidate.date
            ),
        ));
    }

    let day_shift: Decimal =
        candidate.day_shift + effective.iter().map(|s| s.day_shift).sum::<Decimal>();
    if day_shift > MAX_DAY_SHIFT_HOURS {
        violations.push(Violation::new(
            ViolationKind::Ceiling,
            "day_shift_over_cap",
            format!(
                "Day shift hours on {} ({day_shift}) exceed the {MAX_DAY_SHIFT_HOURS} hour cap.",
                candidate.date
            ),
        ));
    }

    let night_shift: Decimal =
        candidate.night_shift + effective.iter().map(|s| s.night_shift).sum::<Decimal>();
    if night_shift > MAX_NIGHT_SHIFT_HOURS {
        violations.push(Violation::new(
            ViolationKind::Ceiling,
            "night_shift_over_cap",
            format!(
                "Night shift hours on {} ({night_shift}) exceed the {MAX_NIGHT_SHIFT_HOURS} hour cap.",
                candidate.date
            ),
        ));
    }
}

/// Rule 5: a sick entry must carry a comment.
fn check_sick_comment(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    let has_comment = candidate.comment.as_deref().is_some_and(|c| !c.trim().is_empty());
    if candidate.is_sick_day() && !has_comment {
        violations.push(Violation::new(
            ViolationKind::MissingMetadata,
            "sick_without_comment",
            "Comment is mandatory when logging sick days.",
        ));
    }
}

/// Rule 6: a reason is present exactly when special-leave hours are, and
/// must be valid on the entry's date.
fn check_special_leave_reason(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    match (&candidate.special_leave_reason, candidate.special_leave > Decimal::ZERO) {
        (Some(_), false) => violations.push(Violation::new(
            ViolationKind::MissingMetadata,
            "reason_on_non_special_leave",
            "Only a special leave can have a reason.",
        )),
        (None, true) => violations.push(Violation::new(
            ViolationKind::MissingMetadata,
            "no_reason_on_special_leave",
            "Reason is required when logging a special leave.",
        )),
        (Some(reason), true) => {
            if !reason.is_valid(candidate.date) {
                violations.push(Violation::new(
                    ViolationKind::Temporal,
                    "invalid_special_leave_reason",
                    format!("Reason \"{}\" is not valid on {}.", reason.title, candidate.date),
                ));
            }
        }
        (None, false) => {}
    }
}
