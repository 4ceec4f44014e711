//! In-memory mock implementations of the timesheet ports, enabling
//! deterministic tests without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use timecard_core::timesheet::ports::{BankLedger, ContractProvider, TimeEntryRepository};
use timecard_domain::{Contract, EntryId, ResourceId, Result, TimeEntry};

/// In-memory `TimeEntryRepository` backed by a mutex-guarded vector.
#[derive(Default, Clone)]
pub struct InMemoryTimeEntryRepository {
    entries: Arc<Mutex<Vec<TimeEntry>>>,
}

impl InMemoryTimeEntryRepository {
    pub fn new(entries: Vec<TimeEntry>) -> Self {
        Self { entries: Arc::new(Mutex::new(entries)) }
    }

    /// Snapshot of everything currently on record.
    pub fn all(&self) -> Vec<TimeEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimeEntryRepository for InMemoryTimeEntryRepository {
    async fn entries_for_day(
        &self,
        resource: ResourceId,
        date: NaiveDate,
    ) -> Result<Vec<TimeEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.resource_id == resource && entry.date == date)
            .cloned()
            .collect())
    }

    async fn save(&self, entry: &TimeEntry) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(existing) = entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry.clone();
        } else {
            entries.push(entry.clone());
        }
        Ok(())
    }

    async fn delete(&self, ids: &[EntryId]) -> Result<usize> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|entry| !ids.contains(&entry.id));
        Ok(before - entries.len())
    }
}

/// `BankLedger` answering a fixed balance.
#[derive(Default, Clone)]
pub struct FixedBankLedger {
    balance: Decimal,
}

impl FixedBankLedger {
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }
}

#[async_trait]
impl BankLedger for FixedBankLedger {
    async fn balance(&self, _resource: ResourceId) -> Result<Decimal> {
        Ok(self.balance)
    }
}

/// `ContractProvider` answering a fixed contract list.
#[derive(Default, Clone)]
pub struct FixedContractProvider {
    contracts: Vec<Contract>,
}

impl FixedContractProvider {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self { contracts }
    }
}

#[async_trait]
impl ContractProvider for FixedContractProvider {
    async fn contracts_for(&self, _resource: ResourceId) -> Result<Vec<Contract>> {
        Ok(self.contracts.clone())
    }
}
