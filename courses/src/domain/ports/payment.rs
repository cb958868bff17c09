//! Payment port
//!
//! Payments are settled by an external payments service. The enrollment
//! core only asks whether a payment covers a given user and session.

use crate::domain::entities::{Session, UserId};

/// Proof of payment for a session
pub trait Payment: Send + Sync {
    /// Whether this payment was made by `user` for `session` at its price
    fn is_paid(&self, user: UserId, session: &Session) -> bool;
}
