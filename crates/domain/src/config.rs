//! Engine configuration
//!
//! All runtime configuration is passed explicitly into the engine; nothing
//! is read from ambient global state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BANK_LOWER_BOUND, DEFAULT_BANK_UPPER_BOUND, DEFAULT_DAILY_WORK_HOURS_MAX,
};
use crate::errors::{Result, TimecardError};
use crate::types::schedule::WeeklySchedule;

/// Configuration for the timesheet rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Lowest admissible bank-hours balance (signed).
    pub bank_lower_bound: Decimal,
    /// Highest admissible bank-hours balance.
    pub bank_upper_bound: Decimal,
    /// Daily ceiling applied when a leave or rest entry is present.
    pub daily_work_hours_max: Decimal,
    /// Schedule used when no contract covers a date.
    pub default_schedule: WeeklySchedule,
}

impl EngineConfig {
    /// Create a configuration, validating the bank bounds straddle zero.
    pub fn new(
        bank_lower_bound: Decimal,
        bank_upper_bound: Decimal,
        daily_work_hours_max: Decimal,
        default_schedule: WeeklySchedule,
    ) -> Result<Self> {
        if bank_lower_bound > Decimal::ZERO || bank_upper_bound < Decimal::ZERO {
            return Err(TimecardError::Config(format!(
                "bank bounds must straddle zero, got [{bank_lower_bound}, {bank_upper_bound}]"
            )));
        }
        if daily_work_hours_max <= Decimal::ZERO {
            return Err(TimecardError::Config(format!(
                "daily_work_hours_max must be positive, got {daily_work_hours_max}"
            )));
        }
        Ok(Self { bank_lower_bound, bank_upper_bound, daily_work_hours_max, default_schedule })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bank_lower_bound: DEFAULT_BANK_LOWER_BOUND,
            bank_upper_bound: DEFAULT_BANK_UPPER_BOUND,
            daily_work_hours_max: DEFAULT_DAILY_WORK_HOURS_MAX,
            default_schedule: WeeklySchedule::default(),
        }
    }
}
