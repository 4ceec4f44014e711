//! Error types used throughout the rule engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Timecard
///
/// Business-rule rejections are NOT errors: they travel in
/// `ValidationOutcome` so that every violated rule can be reported in one
/// pass. This enum covers caller mistakes and infrastructure failures
/// surfaced through ports.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TimecardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Timecard operations
pub type Result<T> = std::result::Result<T, TimecardError>;
