//! Validation verdicts
//!
//! The validator never throws for business-rule failures: it evaluates
//! every rule and returns either an acceptance (with the sibling rows to
//! supersede) or the complete list of violations.

use std::fmt;

use serde::{Deserialize, Serialize};
use timecard_domain::EntryId;

/// Classification of a violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Wrong fields populated for the entry's kind.
    Shape,
    /// Multiple absence kinds, or simultaneous bank deposit and withdrawal.
    MutualExclusion,
    /// A per-day, per-field or bank-balance ceiling was exceeded.
    Ceiling,
    /// Mandatory comment or special-leave reason missing.
    MissingMetadata,
    /// A special-leave reason used outside its validity window.
    Temporal,
    /// A deletion would leave the day's ledger inconsistent.
    Integrity,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shape => "shape",
            Self::MutualExclusion => "mutual_exclusion",
            Self::Ceiling => "ceiling",
            Self::MissingMetadata => "missing_metadata",
            Self::Temporal => "temporal",
            Self::Integrity => "integrity",
        };
        write!(f, "{name}")
    }
}

/// One violated rule, with a stable code and a human-readable message
/// carrying the offending values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub code: String,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, code: code.into(), message: message.into() }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Verdict of validating a candidate entry (or a deletion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// The candidate is acceptable; the listed sibling rows must be
    /// deleted (superseded) when it is persisted.
    Accepted { to_delete: Vec<EntryId> },
    /// The candidate violates one or more rules; nothing may change.
    Rejected { violations: Vec<Violation> },
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The violations, empty when accepted.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Accepted { .. } => &[],
            Self::Rejected { violations } => violations,
        }
    }

    /// The rows to supersede, empty when rejected.
    pub fn to_delete(&self) -> &[EntryId] {
        match self {
            Self::Accepted { to_delete } => to_delete,
            Self::Rejected { .. } => &[],
        }
    }
}
