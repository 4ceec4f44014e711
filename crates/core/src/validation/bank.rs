//! Bank-hours ledger guard
//!
//! The hour bank lets a resource bank surplus hours (`bank_to`) or draw
//! down previously banked hours (`bank_from`) against a running signed
//! balance bounded by configured limits. This module validates a single
//! entry's proposed movement against the balance and the day's schedule.

use rust_decimal::Decimal;
use timecard_domain::{EngineConfig, TimeEntry};

use super::validator::{BankState, DayContext};
use super::violation::{Violation, ViolationKind};

/// Evaluate every bank rule for the candidate, pushing all violations.
///
/// `effective_siblings` is the post-supersession sibling set; the worked
/// hours compared against the schedule come from it plus the candidate.
pub(crate) fn check(
    candidate: &TimeEntry,
    effective_siblings: &[&TimeEntry],
    day: &DayContext,
    bank: &BankState,
    config: &EngineConfig,
    violations: &mut Vec<Violation>,
) {
    if !candidate.has_bank_movement() {
        return;
    }

    check_exclusive_direction(candidate, violations);
    check_balance_bounds(candidate, bank, config, violations);
    check_holiday_and_sick(candidate, day, violations);
    check_deposit_while_absent(candidate, violations);
    check_against_schedule(candidate, effective_siblings, day, violations);
}

/// Rule a: withdrawal and deposit are mutually exclusive per entry.
fn check_exclusive_direction(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    if candidate.bank_from > Decimal::ZERO && candidate.bank_to > Decimal::ZERO {
        violations.push(Violation::new(
            ViolationKind::MutualExclusion,
            "bank_deposit_and_withdrawal",
            "Cannot both withdraw from and deposit to bank hours on the same day.",
        ));
    }
}

/// Rule b: the new balance must stay within the configured bounds.
fn check_balance_bounds(
    candidate: &TimeEntry,
    bank: &BankState,
    config: &EngineConfig,
    violations: &mut Vec<Violation>,
) {
    let delta = candidate.bank_delta();
    let new_balance = bank.balance + delta;

    if new_balance > config.bank_upper_bound {
        violations.push(Violation::new(
            ViolationKind::Ceiling,
            "bank_balance_above_maximum",
            format!(
                "This transaction would exceed the maximum bank balance of {} hours. \
                 Current balance: {:.2}, attempting to change by: {:.2}.",
                config.bank_upper_bound, bank.balance, delta
            ),
        ));
    } else if new_balance < config.bank_lower_bound {
        violations.push(Violation::new(
            ViolationKind::Ceiling,
            "bank_balance_below_minimum",
            format!(
                "This transaction would exceed the minimum bank balance of {} hours. \
                 Current balance: {:.2}, attempting to change by: {:.2}.",
                config.bank_lower_bound, bank.balance, delta
            ),
        ));
    }
}

/// Rule c: no bank movement on holidays or sick days.
fn check_holiday_and_sick(candidate: &TimeEntry, day: &DayContext, violations: &mut Vec<Violation>) {
    if day.is_holiday || candidate.is_sick_day() {
        violations.push(Violation::new(
            ViolationKind::MutualExclusion,
            "bank_on_holiday_or_sick_day",
            "Bank hours cannot be used on a holiday or sick day.",
        ));
    }
}

/// Rule d: deposits are disallowed on leave, rest and special-leave
/// day-entries. Sick and holiday are covered by rule c.
fn check_deposit_while_absent(candidate: &TimeEntry, violations: &mut Vec<Violation>) {
    if candidate.bank_to > Decimal::ZERO && candidate.prevents_overtime_on_same_day() {
        violations.push(Violation::new(
            ViolationKind::MutualExclusion,
            "bank_deposit_while_absent",
            "Cannot deposit bank hours while on leave or rest.",
        ));
    }
}

/// Rule e: for day entries, compare the day's worked hours plus the
/// proposed movement against the scheduled due hours.
fn check_against_schedule(
    candidate: &TimeEntry,
    effective_siblings: &[&TimeEntry],
    day: &DayContext,
    violations: &mut Vec<Violation>,
) {
    if !candidate.is_day_entry() {
        return;
    }

    let worked: Decimal = effective_siblings
        .iter()
        .map(|sibling| sibling.total_task_hours())
        .sum::<Decimal>()
        + candidate.total_task_hours();

    if candidate.bank_to > Decimal::ZERO {
        let remaining = worked - candidate.bank_to;
        if remaining < day.due_hours {
            violations.push(Violation::new(
                ViolationKind::Ceiling,
                "bank_deposit_below_schedule",
                format!(
                    "Cannot deposit {:.2} bank hours. Total hours would become {:.2} \
                     which is below scheduled hours ({}).",
                    candidate.bank_to, remaining, day.due_hours
                ),
            ));
        }
    }

    if candidate.bank_from > Decimal::ZERO && worked >= day.due_hours {
        violations.push(Violation::new(
            ViolationKind::Ceiling,
            "bank_withdrawal_on_full_schedule",
            format!(
                "Cannot withdraw {:.2} bank hours. Task hours logged ({:.2}) \
                 already meet scheduled hours ({}).",
                candidate.bank_from, worked, day.due_hours
            ),
        ));
    }
}
