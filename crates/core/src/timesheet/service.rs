//! Timesheet service - orchestrates validation, supersession and
//! aggregation around the port boundaries.

use std::sync::Arc;

use chrono::NaiveDate;
use timecard_domain::{DerivedDayRecord, EngineConfig, ResourceId, Result, TimeEntry};
use tracing::{debug, warn};

use super::ports::{BankLedger, ContractProvider, TimeEntryRepository};
use crate::aggregation;
use crate::schedule::{HolidayCalendar, ScheduleResolver};
use crate::validation::{BankState, DayContext, EntryValidator, ValidationOutcome};

/// Timesheet service.
///
/// One instance serves many resources; all state lives behind the ports.
pub struct TimesheetService {
    entries: Arc<dyn TimeEntryRepository>,
    ledger: Arc<dyn BankLedger>,
    contracts: Arc<dyn ContractProvider>,
    calendar: Arc<dyn HolidayCalendar>,
    config: EngineConfig,
    validator: EntryValidator,
}

impl TimesheetService {
    pub fn new(
        entries: Arc<dyn TimeEntryRepository>,
        ledger: Arc<dyn BankLedger>,
        contracts: Arc<dyn ContractProvider>,
        calendar: Arc<dyn HolidayCalendar>,
        config: EngineConfig,
    ) -> Self {
        let validator = EntryValidator::new(config.clone());
        Self { entries, ledger, contracts, calendar, config, validator }
    }

    /// Validate and persist a candidate entry.
    ///
    /// On acceptance the superseded sibling rows are deleted and the
    /// entry is saved; on rejection nothing changes and the complete
    /// violation list is returned.
    pub async fn submit_entry(&self, entry: TimeEntry) -> Result<ValidationOutcome> {
        let resolver = self.resolver_for(entry.resource_id).await?;
        let day = DayContext {
            due_hours: resolver.due_hours(entry.date),
            is_holiday: resolver.is_holiday(entry.date),
        };
        let bank = BankState { balance: self.ledger.balance(entry.resource_id).await? };
        let siblings = self.entries.entries_for_day(entry.resource_id, entry.date).await?;

        let outcome = self.validator.validate(&entry, &siblings, &day, &bank);
        match &outcome {
            ValidationOutcome::Accepted { to_delete } => {
                if !to_delete.is_empty() {
                    let removed = self.entries.delete(to_delete).await?;
                    debug!(
                        resource = %entry.resource_id,
                        date = %entry.date,
                        removed,
                        "superseded sibling entries"
                    );
                }
                self.entries.save(&entry).await?;
            }
            ValidationOutcome::Rejected { violations } => {
                warn!(
                    resource = %entry.resource_id,
                    date = %entry.date,
                    violations = violations.len(),
                    "rejected time entry"
                );
            }
        }
        Ok(outcome)
    }

    /// Remove an entry, enforcing the deletion-safety rule.
    pub async fn remove_entry(&self, entry: &TimeEntry) -> Result<ValidationOutcome> {
        let siblings = self.entries.entries_for_day(entry.resource_id, entry.date).await?;
        let outcome = self.validator.validate_delete(entry, &siblings);
        if let ValidationOutcome::Accepted { to_delete } = &outcome {
            self.entries.delete(to_delete).await?;
        }
        Ok(outcome)
    }

    /// Compute the derived record for a resource's date, on demand.
    pub async fn derived_record(
        &self,
        resource: ResourceId,
        date: NaiveDate,
    ) -> Result<DerivedDayRecord> {
        let resolver = self.resolver_for(resource).await?;
        let due_hours = resolver.due_hours(date);
        let is_working_day = !resolver.is_holiday(date) && due_hours > rust_decimal::Decimal::ZERO;
        let threshold = resolver.meal_voucher_threshold(date);
        let entries = self.entries.entries_for_day(resource, date).await?;
        aggregation::calculate(is_working_day, due_hours, threshold, &entries)
    }

    async fn resolver_for(&self, resource: ResourceId) -> Result<ScheduleResolver> {
        let contracts = self.contracts.contracts_for(resource).await?;
        Ok(ScheduleResolver::new(
            contracts,
            self.config.default_schedule.clone(),
            Arc::clone(&self.calendar),
        ))
    }
}
