//! Entry validation
//!
//! Decides whether a candidate time entry is acceptable for its resource
//! and date, which sibling rows it supersedes, and whether removing an
//! entry is safe. Rules are synchronous and side-effect-free; deletions
//! are instructions to the caller, never applied here.

mod bank;
mod supersession;
mod validator;
mod violation;

pub use validator::{BankState, DayContext, EntryValidator};
pub use violation::{ValidationOutcome, Violation, ViolationKind};
