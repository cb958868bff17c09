//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Apply, PaymentRecord, Session, SessionId, UserId};
use crate::domain::ports::{ApplyRepository, PaymentRepository, SessionRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Session Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a session for testing
    pub fn with_session(self, session: Session) -> Self {
        self.sessions.write().unwrap().insert(session.id(), session);
        self
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().unwrap();
        Ok(sessions.get(id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().unwrap();
        if !sessions.contains_key(&session.id()) {
            return Err(DomainError::NotFound(format!("Session {}", session.id())));
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }
}

// ============================================================================
// In-Memory Payment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPaymentRepository {
    payments: Arc<RwLock<HashMap<(UserId, SessionId), PaymentRecord>>>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a payment for testing
    pub fn with_payment(self, payment: PaymentRecord) -> Self {
        self.payments
            .write()
            .unwrap()
            .insert((payment.user_id, payment.session_id), payment);
        self
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn find_by_user_and_session(
        &self,
        user: &UserId,
        session: &SessionId,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        let payments = self.payments.read().unwrap();
        Ok(payments.get(&(*user, *session)).cloned())
    }
}

// ============================================================================
// In-Memory Apply Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryApplyRepository {
    applies: Arc<RwLock<Vec<Apply>>>,
}

impl InMemoryApplyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplyRepository for InMemoryApplyRepository {
    async fn record(&self, apply: &Apply) -> Result<(), DomainError> {
        self.applies.write().unwrap().push(*apply);
        Ok(())
    }

    async fn list_by_session(&self, session: &SessionId) -> Result<Vec<Apply>, DomainError> {
        let applies = self.applies.read().unwrap();
        Ok(applies
            .iter()
            .filter(|a| a.session_id() == *session)
            .copied()
            .collect())
    }
}

/// Apply store that rejects every write
pub struct FailingApplyRepository;

#[async_trait]
impl ApplyRepository for FailingApplyRepository {
    async fn record(&self, _apply: &Apply) -> Result<(), DomainError> {
        Err(DomainError::Database("apply store unavailable".to_string()))
    }

    async fn list_by_session(&self, _session: &SessionId) -> Result<Vec<Apply>, DomainError> {
        Ok(Vec::new())
    }
}
