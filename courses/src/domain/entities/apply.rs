//! Apply record
//!
//! One successful enrollment of a user in a session. Created by
//! `Session::apply` and never changed afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::session::SessionId;
use super::user::UserId;

/// Immutable record of an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apply {
    session_id: SessionId,
    user_id: UserId,
    applied_at: DateTime<Utc>,
}

impl Apply {
    /// Build a record; adapters use this to rebuild stored enrollments
    pub fn new(session_id: SessionId, user_id: UserId, applied_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            user_id,
            applied_at,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }
}
