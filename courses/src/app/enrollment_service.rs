//! Enrollment service
//!
//! Loads sessions through the repository ports, applies the domain rules,
//! and persists the result.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{Apply, Session, SessionId, SessionStatus, UserId};
use crate::domain::ports::{ApplyRepository, Payment, PaymentRepository, SessionRepository};
use crate::error::DomainError;

/// Service for session lifecycle and enrollment
pub struct EnrollmentService<SR, PR, AR>
where
    SR: SessionRepository,
    PR: PaymentRepository,
    AR: ApplyRepository,
{
    sessions: Arc<SR>,
    payments: Arc<PR>,
    applies: Arc<AR>,
}

impl<SR, PR, AR> EnrollmentService<SR, PR, AR>
where
    SR: SessionRepository,
    PR: PaymentRepository,
    AR: ApplyRepository,
{
    pub fn new(sessions: Arc<SR>, payments: Arc<PR>, applies: Arc<AR>) -> Self {
        Self {
            sessions,
            payments,
            applies,
        }
    }

    /// Open a session for applications as of `today`
    pub async fn open_recruitment(
        &self,
        session_id: &SessionId,
        today: NaiveDate,
    ) -> Result<SessionStatus, DomainError> {
        let mut session = self.load(session_id).await?;
        session.change_on_recruit(today).inspect_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "Recruitment not opened");
        })?;
        self.sessions.save(&session).await?;

        tracing::info!(session_id = %session_id, "Session is recruiting");
        Ok(session.status())
    }

    /// Put a session back into `Ready` as of `today`
    pub async fn pause_recruitment(
        &self,
        session_id: &SessionId,
        today: NaiveDate,
    ) -> Result<SessionStatus, DomainError> {
        let mut session = self.load(session_id).await?;
        session.change_on_ready(today).inspect_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "Session not reset to ready");
        })?;
        self.sessions.save(&session).await?;

        tracing::info!(session_id = %session_id, "Session is ready");
        Ok(session.status())
    }

    /// End a session as of `today`
    pub async fn close(
        &self,
        session_id: &SessionId,
        today: NaiveDate,
    ) -> Result<SessionStatus, DomainError> {
        let mut session = self.load(session_id).await?;
        session.change_on_end(today).inspect_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "Session not closed");
        })?;
        self.sessions.save(&session).await?;

        tracing::info!(session_id = %session_id, "Session ended");
        Ok(session.status())
    }

    /// Enroll a user in a session
    ///
    /// For charged sessions the user's payment is looked up first; a
    /// missing payment surfaces as `PaymentRequired`. If the `Apply` cannot
    /// be recorded, the session is saved back as it was before the call.
    pub async fn enroll(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<Apply, DomainError> {
        let mut session = self.load(session_id).await?;
        let before = session.clone();

        let payment = if session.state().charged() {
            self.payments
                .find_by_user_and_session(user_id, session_id)
                .await?
        } else {
            None
        };

        let apply = session
            .apply(*user_id, payment.as_ref().map(|p| p as &dyn Payment), at)
            .inspect_err(|e| {
                tracing::warn!(
                    session_id = %session_id,
                    user_id = %user_id,
                    error = %e,
                    "Enrollment rejected"
                );
            })?;

        self.sessions.save(&session).await?;
        if let Err(e) = self.applies.record(&apply).await {
            tracing::error!(
                session_id = %session_id,
                user_id = %user_id,
                error = %e,
                "Apply not recorded, restoring session"
            );
            if let Err(restore) = self.sessions.save(&before).await {
                tracing::error!(session_id = %session_id, error = %restore, "Session restore failed");
            }
            return Err(e);
        }

        tracing::info!(
            session_id = %session_id,
            user_id = %user_id,
            applicants = session.apply_count(),
            "User enrolled"
        );
        Ok(apply)
    }

    /// Enrollment records for a session
    pub async fn list_applies(&self, session_id: &SessionId) -> Result<Vec<Apply>, DomainError> {
        self.applies.list_by_session(session_id).await
    }

    async fn load(&self, session_id: &SessionId) -> Result<Session, DomainError> {
        self.sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Session {}", session_id)))
    }
}
