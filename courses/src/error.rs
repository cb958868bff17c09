//! Error types for the enrollment core
//!
//! Every rule violation surfaces as a `DomainError` variant so callers
//! (HTTP layers, jobs) can map them to user-facing responses without
//! string matching.

use thiserror::Error;

use crate::domain::entities::{SessionStatus, UserId};

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid duration: start {start} is after end {end}")]
    InvalidDuration {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Invalid cover image: {0}")]
    InvalidImage(String),

    #[error("Cannot change session from {from} to {to}: {reason}")]
    InvalidTransition {
        from: SessionStatus,
        to: SessionStatus,
        reason: String,
    },

    #[error("Session is not recruiting (status: {0})")]
    NotRecruiting(SessionStatus),

    #[error("Payment is required for this session")]
    PaymentRequired,

    #[error("Payment does not match the user, session or price")]
    PaymentMismatch,

    #[error("Session is full (capacity: {capacity})")]
    CapacityExceeded { capacity: u32 },

    #[error("User {0} has already applied to this session")]
    AlreadyEnrolled(UserId),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Whether the error is a rule violation the caller caused, as opposed
    /// to a storage failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Database(_))
    }
}
