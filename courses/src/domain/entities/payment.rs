//! Payment record
//!
//! The payments service's view of a settled payment, as handed to the
//! enrollment core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::{Session, SessionId};
use super::user::UserId;
use crate::domain::ports::Payment;

/// Unique identifier for a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub Uuid);

impl PaymentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A settled payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Amount in the smallest currency unit
    pub amount: u64,
    pub paid_at: DateTime<Utc>,
}

impl Payment for PaymentRecord {
    fn is_paid(&self, user: UserId, session: &Session) -> bool {
        self.user_id == user && session.same_id(self.session_id) && session.same_amount(self.amount)
    }
}
