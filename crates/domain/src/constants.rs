//! Domain constants
//!
//! Centralized location for the hour caps and configuration defaults used
//! by the rule engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Per-day ceilings
pub const MAX_HOURS_PER_DAY: Decimal = dec!(24);
pub const MAX_DAY_SHIFT_HOURS: Decimal = dec!(16);
pub const MAX_NIGHT_SHIFT_HOURS: Decimal = dec!(8);

// Bank-hours ledger defaults
pub const DEFAULT_BANK_LOWER_BOUND: Decimal = dec!(-16);
pub const DEFAULT_BANK_UPPER_BOUND: Decimal = dec!(16);

// Schedule defaults
pub const DEFAULT_WORKDAY_HOURS: Decimal = dec!(8);
pub const DEFAULT_DAILY_WORK_HOURS_MAX: Decimal = dec!(8);
