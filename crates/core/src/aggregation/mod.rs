//! Daily aggregation engine
//!
//! Reduces one day's validated entries into the canonical reported
//! quantities. Fields untouched by any entry stay unset (`None`) so that
//! report rendering can distinguish a blank cell from an explicit zero.

use rust_decimal::Decimal;
use timecard_domain::{DerivedDayRecord, Result, TimeEntry, TimecardError};

/// Reduce a day's entries into a `DerivedDayRecord`.
///
/// Preconditions: the entries have already been validated and superseded
/// for one resource and date. Entries spanning multiple dates are a
/// caller error and yield `TimecardError::InvalidInput`; under the stated
/// precondition this function never fails.
pub fn calculate(
    is_working_day: bool,
    due_hours: Decimal,
    meal_voucher_threshold: Option<Decimal>,
    entries: &[TimeEntry],
) -> Result<DerivedDayRecord> {
    verify_same_day(entries)?;

    let mut record = DerivedDayRecord::default();
    let mut bank_to_total = Decimal::ZERO;
    let mut bank_from_total = Decimal::ZERO;

    for entry in entries {
        accumulate(&mut record.day_shift, entry.day_shift);
        accumulate(&mut record.night_shift, entry.night_shift);
        accumulate(&mut record.on_call, entry.on_call);
        accumulate(&mut record.travel, entry.travel);
        accumulate(&mut record.holiday, entry.holiday);
        accumulate(&mut record.leave, entry.leave);
        accumulate(&mut record.rest, entry.rest);
        accumulate(&mut record.sick, entry.sick);
        accumulate(&mut record.special_leave_hours, entry.special_leave);

        bank_to_total += entry.bank_to;
        bank_from_total += entry.bank_from;

        // Not expected to be split across entries; first value wins
        if record.special_leave_reason.is_none() {
            record.special_leave_reason = entry.special_leave_reason.clone();
        }
        if record.protocol_number.is_none() {
            record.protocol_number = entry.protocol_number.clone();
        }
    }

    // A protocol number is meaningless without a sick entry
    if record.sick.is_none() {
        record.protocol_number = None;
    }

    if bank_to_total > Decimal::ZERO || bank_from_total > Decimal::ZERO {
        record.bank = Some(bank_to_total - bank_from_total);
    }

    let withdrawn = (bank_from_total - bank_to_total).max(Decimal::ZERO);
    let banked = (bank_to_total - bank_from_total).max(Decimal::ZERO);
    let worked: Decimal =
        entries.iter().map(TimeEntry::total_task_hours).sum::<Decimal>() + withdrawn;
    let absence: Decimal = entries.iter().map(TimeEntry::absence_hours).sum();
    let rest: Decimal = entries.iter().map(|entry| entry.rest).sum();

    if absence == Decimal::ZERO && is_working_day {
        let overtime = worked - due_hours - banked;
        if overtime > Decimal::ZERO {
            record.overtime = Some(overtime);
        }
    }

    if worked > Decimal::ZERO {
        record.regular_hours = Some(worked.min(due_hours));
    }

    record.fulfilled = worked + absence + rest >= due_hours;

    if meal_voucher_threshold.is_some_and(|threshold| threshold <= worked) {
        record.meal_voucher = Some(Decimal::ONE);
    }

    Ok(record)
}

/// All entries must belong to the same day.
fn verify_same_day(entries: &[TimeEntry]) -> Result<()> {
    if let Some(first) = entries.first() {
        if entries.iter().any(|entry| entry.date != first.date) {
            return Err(TimecardError::InvalidInput(
                "time entries must belong to the same day".to_string(),
            ));
        }
    }
    Ok(())
}

/// Add a nonzero value into an optional accumulator. Zero-valued fields
/// never populate the slot, preserving the unset semantics.
fn accumulate(slot: &mut Option<Decimal>, value: Decimal) {
    if value != Decimal::ZERO {
        *slot = Some(slot.unwrap_or(Decimal::ZERO) + value);
    }
}
