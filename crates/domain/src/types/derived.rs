//! Derived day record
//!
//! The reduced, canonical quantities for one resource on one date, as
//! computed by the daily aggregation engine. Every hour field is optional:
//! `None` means no entry touched the field at all, which downstream report
//! rendering shows as a blank cell rather than a zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::leave::SpecialLeaveReason;

/// One aggregated record per resource per date. Purely computed, never
/// persisted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedDayRecord {
    pub day_shift: Option<Decimal>,
    pub night_shift: Option<Decimal>,
    pub on_call: Option<Decimal>,
    pub travel: Option<Decimal>,

    pub holiday: Option<Decimal>,
    pub leave: Option<Decimal>,
    pub rest: Option<Decimal>,
    pub sick: Option<Decimal>,

    pub special_leave_hours: Option<Decimal>,
    pub special_leave_reason: Option<SpecialLeaveReason>,

    /// Signed net bank movement for the day; `None` when no bank activity.
    pub bank: Option<Decimal>,

    /// Hours worked beyond the scheduled due hours. Only computed on
    /// working days with no absence logged.
    pub overtime: Option<Decimal>,

    /// Worked hours clamped to the scheduled due hours.
    pub regular_hours: Option<Decimal>,

    /// Sick-leave reference code; only meaningful alongside sick hours.
    pub protocol_number: Option<String>,

    /// Meal voucher earned for the day, when a threshold applies.
    pub meal_voucher: Option<Decimal>,

    /// Whether logged hours (work, absences and rest) reach the due hours.
    pub fulfilled: bool,
}

impl DerivedDayRecord {
    /// Whether any entry contributed data to this record.
    pub fn has_data(&self) -> bool {
        self.day_shift.is_some()
            || self.night_shift.is_some()
            || self.on_call.is_some()
            || self.travel.is_some()
            || self.holiday.is_some()
            || self.leave.is_some()
            || self.rest.is_some()
            || self.sick.is_some()
            || self.special_leave_hours.is_some()
            || self.bank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_record_has_no_data() {
        let record = DerivedDayRecord::default();
        assert!(!record.has_data());
        assert!(!record.fulfilled);
    }

    #[test]
    fn any_populated_field_counts_as_data() {
        let record = DerivedDayRecord { bank: Some(dec!(-2)), ..DerivedDayRecord::default() };
        assert!(record.has_data());
    }
}
