//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Apply, PaymentRecord, Session, SessionId, UserId};
use crate::error::DomainError;

/// Repository for Session entities
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find a session by ID
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Persist the current status, state and applicants of a session
    async fn save(&self, session: &Session) -> Result<(), DomainError>;
}

/// Read access to payments settled by the payments service
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find the payment a user made for a session, if any
    async fn find_by_user_and_session(
        &self,
        user: &UserId,
        session: &SessionId,
    ) -> Result<Option<PaymentRecord>, DomainError>;
}

/// Append-only store of enrollment records
#[async_trait]
pub trait ApplyRepository: Send + Sync {
    /// Record a successful enrollment
    async fn record(&self, apply: &Apply) -> Result<(), DomainError>;

    /// List enrollments for a session in the order they were recorded
    async fn list_by_session(&self, session: &SessionId) -> Result<Vec<Apply>, DomainError>;
}
