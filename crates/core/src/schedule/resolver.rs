//! Due-hours resolution for one resource

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use timecard_domain::{Contract, WeeklySchedule};

use super::calendar::HolidayCalendar;

/// Resolves the expected working hours for a resource's dates.
///
/// The schedule in effect for a date is the work schedule of the contract
/// covering it; outside any contract (or for a contract without a
/// schedule) the default schedule applies. Holidays yield zero due hours
/// unless the governing schedule explicitly allows holiday work.
///
/// Never fails: with nothing resolvable the default schedule answers.
pub struct ScheduleResolver {
    contracts: Vec<Contract>,
    default_schedule: WeeklySchedule,
    calendar: Arc<dyn HolidayCalendar>,
}

impl ScheduleResolver {
    pub fn new(
        contracts: Vec<Contract>,
        default_schedule: WeeklySchedule,
        calendar: Arc<dyn HolidayCalendar>,
    ) -> Self {
        Self { contracts, default_schedule, calendar }
    }

    /// Expected working hours for the date.
    pub fn due_hours(&self, date: NaiveDate) -> Decimal {
        let schedule = self
            .contracts
            .iter()
            .find(|contract| contract.covers(date))
            .and_then(|contract| contract.work_schedule.as_ref())
            .unwrap_or(&self.default_schedule);

        if self.calendar.is_holiday(date) && !schedule.allows_holidays {
            return Decimal::ZERO;
        }
        schedule.hours_for(date)
    }

    /// Whether the date is a holiday for this resource.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.calendar.is_holiday(date)
    }

    /// Meal voucher threshold for the date, from the covering contract.
    pub fn meal_voucher_threshold(&self, date: NaiveDate) -> Option<Decimal> {
        self.contracts
            .iter()
            .find(|contract| contract.covers(date))
            .and_then(|contract| contract.meal_voucher_thresholds.as_ref())
            .map(|thresholds| thresholds.hours_for(date))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use timecard_domain::ResourceId;

    use super::*;
    use crate::schedule::calendar::{FixedHolidayCalendar, WeekendCalendar};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resolver_with(contracts: Vec<Contract>) -> ScheduleResolver {
        ScheduleResolver::new(contracts, WeeklySchedule::default(), Arc::new(WeekendCalendar))
    }

    #[test]
    fn falls_back_to_default_schedule_without_contracts() {
        let resolver = resolver_with(vec![]);
        // Friday
        assert_eq!(resolver.due_hours(day(2025, 7, 4)), dec!(8));
        // Saturday
        assert_eq!(resolver.due_hours(day(2025, 7, 5)), Decimal::ZERO);
    }

    #[test]
    fn contract_schedule_wins_inside_its_period() {
        let mut hours = [dec!(6); 7];
        hours[5] = Decimal::ZERO;
        hours[6] = Decimal::ZERO;
        let contract = Contract::new(ResourceId(1), day(2025, 1, 1), Some(day(2025, 8, 1)))
            .with_schedule(WeeklySchedule::new(hours).unwrap());
        let resolver = resolver_with(vec![contract]);

        assert_eq!(resolver.due_hours(day(2025, 7, 4)), dec!(6));
        // First day past the half-open period: back to the default
        assert_eq!(resolver.due_hours(day(2025, 8, 1)), dec!(8));
    }

    #[test]
    fn contract_without_schedule_uses_default() {
        let contract = Contract::new(ResourceId(1), day(2025, 1, 1), None);
        let resolver = resolver_with(vec![contract]);
        assert_eq!(resolver.due_hours(day(2025, 7, 4)), dec!(8));
    }

    #[test]
    fn holidays_zero_the_due_hours() {
        let calendar = Arc::new(FixedHolidayCalendar::new([day(2025, 12, 25)]));
        let resolver =
            ScheduleResolver::new(vec![], WeeklySchedule::default(), calendar);
        // Thursday, but a holiday
        assert_eq!(resolver.due_hours(day(2025, 12, 25)), Decimal::ZERO);
        assert!(resolver.is_holiday(day(2025, 12, 25)));
    }

    #[test]
    fn schedule_may_explicitly_allow_holiday_work() {
        let schedule = WeeklySchedule::default().with_holidays_allowed();
        let calendar = Arc::new(FixedHolidayCalendar::new([day(2025, 12, 25)]));
        let resolver = ScheduleResolver::new(vec![], schedule, calendar);
        assert_eq!(resolver.due_hours(day(2025, 12, 25)), dec!(8));
    }

    #[test]
    fn meal_voucher_threshold_comes_from_contract() {
        let contract = Contract::new(ResourceId(1), day(2025, 1, 1), None)
            .with_meal_voucher_thresholds(WeeklySchedule::new([dec!(4); 7]).unwrap());
        let resolver = resolver_with(vec![contract]);
        assert_eq!(resolver.meal_voucher_threshold(day(2025, 7, 4)), Some(dec!(4)));

        let resolver = resolver_with(vec![]);
        assert_eq!(resolver.meal_voucher_threshold(day(2025, 7, 4)), None);
    }
}
