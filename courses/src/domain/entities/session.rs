//! Session domain entity
//!
//! A dated offering of a course. Sessions move READY → RECRUIT → END and
//! accept applicants only while recruiting.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::applicants::Applicants;
use super::apply::Apply;
use super::course::CourseId;
use super::duration::Duration;
use super::image::Images;
use super::session_state::SessionState;
use super::user::UserId;
use crate::domain::ports::Payment;
use crate::error::DomainError;

/// Unique identifier for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Created, not yet open for applications
    Ready,
    /// Accepting applications
    Recruit,
    /// Finished; terminal
    End,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Ready => write!(f, "ready"),
            SessionStatus::Recruit => write!(f, "recruit"),
            SessionStatus::End => write!(f, "end"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ready" => Ok(SessionStatus::Ready),
            "recruit" | "recruiting" => Ok(SessionStatus::Recruit),
            "end" | "ended" => Ok(SessionStatus::End),
            _ => Err(format!("Unknown session status: {}", s)),
        }
    }
}

/// Data needed to create a new session
///
/// Optional fields mirror what a caller may omit; `Session::create`
/// reports the first missing one.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub course_id: CourseId,
    pub images: Option<Images>,
    pub duration: Option<Duration>,
    pub state: Option<SessionState>,
    pub creator_id: UserId,
}

/// A session as loaded back from storage
#[derive(Debug, Clone)]
pub struct StoredSession {
    pub id: SessionId,
    pub course_id: CourseId,
    pub images: Images,
    pub duration: Duration,
    pub state: SessionState,
    pub applicants: Vec<UserId>,
    pub status: SessionStatus,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A scheduled offering of a course
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    id: SessionId,
    course_id: CourseId,
    images: Images,
    duration: Duration,
    state: SessionState,
    applicants: Applicants,
    status: SessionStatus,
    creator_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session in `Ready` status with no applicants
    pub fn create(
        new: NewSession,
        id: SessionId,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let images = new.images.ok_or(DomainError::MissingField("images"))?;
        let duration = new.duration.ok_or(DomainError::MissingField("duration"))?;
        let state = new.state.ok_or(DomainError::MissingField("state"))?;

        Ok(Self {
            id,
            course_id: new.course_id,
            images,
            duration,
            state,
            applicants: Applicants::new(),
            status: SessionStatus::Ready,
            creator_id: new.creator_id,
            created_at,
            updated_at: None,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn images(&self) -> &Images {
        &self.images
    }

    pub fn duration(&self) -> &Duration {
        &self.duration
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn applicants(&self) -> &Applicants {
        &self.applicants
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn creator_id(&self) -> UserId {
        self.creator_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replace the cover images
    pub fn set_images(&mut self, images: Images) {
        self.images = images;
    }

    /// Replace price and capacity. Existing applicants are kept even if
    /// the new capacity is lower; only new applications are limited.
    pub fn set_state(&mut self, state: SessionState) {
        self.state = state;
    }

    pub fn same_amount(&self, amount: u64) -> bool {
        self.state.same_amount(amount)
    }

    pub fn same_id(&self, id: SessionId) -> bool {
        self.id == id
    }

    pub fn apply_count(&self) -> usize {
        self.applicants.size()
    }

    pub fn is_full(&self) -> bool {
        !self.state.has_room_for(self.applicants.size())
    }

    /// Enroll `user` in the session
    ///
    /// Requires `Recruit` status, and for charged sessions a payment that
    /// covers this user, session and price. Nothing is changed unless every
    /// check passes.
    pub fn apply(
        &mut self,
        user: UserId,
        payment: Option<&dyn Payment>,
        at: DateTime<Utc>,
    ) -> Result<Apply, DomainError> {
        if self.status != SessionStatus::Recruit {
            return Err(DomainError::NotRecruiting(self.status));
        }

        if self.state.charged() {
            let payment = payment.ok_or(DomainError::PaymentRequired)?;
            if !payment.is_paid(user, self) {
                return Err(DomainError::PaymentMismatch);
            }
        }

        self.applicants.add_applicant(user, &self.state)?;
        self.updated_at = Some(at);
        Ok(Apply::new(self.id, user, at))
    }

    /// Move back to `Ready`; only allowed before the start date
    pub fn change_on_ready(&mut self, date: NaiveDate) -> Result<(), DomainError> {
        self.check_before_start(date, SessionStatus::Ready)?;
        self.status = SessionStatus::Ready;
        Ok(())
    }

    /// Open recruitment; only allowed before the start date
    pub fn change_on_recruit(&mut self, date: NaiveDate) -> Result<(), DomainError> {
        self.check_before_start(date, SessionStatus::Recruit)?;
        self.status = SessionStatus::Recruit;
        Ok(())
    }

    /// Close the session; only allowed on or after the end date. Ending an
    /// ended session again is a no-op.
    pub fn change_on_end(&mut self, date: NaiveDate) -> Result<(), DomainError> {
        if !self.duration.has_ended_by(date) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: SessionStatus::End,
                reason: format!(
                    "can only end on or after {}, got {}",
                    self.duration.end_date(),
                    date
                ),
            });
        }
        self.status = SessionStatus::End;
        Ok(())
    }

    /// Open recruitment without a date check
    ///
    /// Administrative override for sessions whose dates are managed
    /// elsewhere. Still refuses to reopen an ended session.
    pub fn start_recruit(&mut self) -> Result<(), DomainError> {
        self.check_not_ended(SessionStatus::Recruit)?;
        self.status = SessionStatus::Recruit;
        Ok(())
    }

    fn check_before_start(&self, date: NaiveDate, to: SessionStatus) -> Result<(), DomainError> {
        self.check_not_ended(to)?;
        if !self.duration.is_before_start(date) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to,
                reason: format!(
                    "can only change before {}, got {}",
                    self.duration.start_date(),
                    date
                ),
            });
        }
        Ok(())
    }

    fn check_not_ended(&self, to: SessionStatus) -> Result<(), DomainError> {
        if self.status == SessionStatus::End {
            return Err(DomainError::InvalidTransition {
                from: SessionStatus::End,
                to,
                reason: "session has already ended".to_string(),
            });
        }
        Ok(())
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Self {
            id: stored.id,
            course_id: stored.course_id,
            images: stored.images,
            duration: stored.duration,
            state: stored.state,
            applicants: Applicants::from_users(stored.applicants),
            status: stored.status,
            creator_id: stored.creator_id,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}
