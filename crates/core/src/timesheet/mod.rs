//! Timesheet orchestration
//!
//! Wires the pure rule engine to external collaborators (persistence,
//! bank ledger, contracts) through port traits.

pub mod ports;
mod service;

pub use service::TimesheetService;
