//! Port interfaces for timesheet orchestration
//!
//! These traits define the boundaries between the rule engine and the
//! infrastructure implementations. The calling layer must serialize
//! concurrent writes for the same resource and date: validation reads
//! the current sibling set, and two concurrent edits validated against
//! the same snapshot could both pass while their combination does not.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use timecard_domain::{Contract, EntryId, ResourceId, Result, TimeEntry};

/// Read and write access to persisted time entries.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// All entries on record for the resource on the date.
    async fn entries_for_day(&self, resource: ResourceId, date: NaiveDate)
        -> Result<Vec<TimeEntry>>;

    /// Persist a new or amended entry.
    async fn save(&self, entry: &TimeEntry) -> Result<()>;

    /// Delete the given rows, returning how many were removed.
    async fn delete(&self, ids: &[EntryId]) -> Result<usize>;
}

/// Read access to the resource's bank-hours running balance.
#[async_trait]
pub trait BankLedger: Send + Sync {
    async fn balance(&self, resource: ResourceId) -> Result<Decimal>;
}

/// Read access to the resource's contracts.
#[async_trait]
pub trait ContractProvider: Send + Sync {
    async fn contracts_for(&self, resource: ResourceId) -> Result<Vec<Contract>>;
}
