//! Session applicants
//!
//! The users enrolled in one session. Grows only through `Session::apply`.

use serde::Serialize;

use super::session_state::SessionState;
use super::user::UserId;
use crate::error::DomainError;

/// Users enrolled in a session, in enrollment order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Applicants(Vec<UserId>);

impl Applicants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted enrollments
    pub(crate) fn from_users(users: Vec<UserId>) -> Self {
        Self(users)
    }

    /// Add a user, enforcing uniqueness and the state's capacity
    pub(crate) fn add_applicant(
        &mut self,
        user: UserId,
        state: &SessionState,
    ) -> Result<(), DomainError> {
        if self.contains(&user) {
            return Err(DomainError::AlreadyEnrolled(user));
        }
        if !state.has_room_for(self.size()) {
            // has_room_for only fails when a capacity is set
            let capacity = state.capacity().unwrap_or_default();
            return Err(DomainError::CapacityExceeded { capacity });
        }
        self.0.push(user);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.0.contains(user)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_increases_size() {
        let mut applicants = Applicants::new();
        let user = UserId::new();
        applicants
            .add_applicant(user, &SessionState::free())
            .unwrap();
        assert_eq!(applicants.size(), 1);
        assert!(applicants.contains(&user));
    }

    #[test]
    fn duplicate_user_is_rejected() {
        let mut applicants = Applicants::new();
        let user = UserId::new();
        let state = SessionState::free();
        applicants.add_applicant(user, &state).unwrap();

        let err = applicants.add_applicant(user, &state).unwrap_err();
        assert_eq!(err, DomainError::AlreadyEnrolled(user));
        assert_eq!(applicants.size(), 1);
    }

    #[test]
    fn charged_capacity_is_enforced() {
        let mut applicants = Applicants::new();
        let state = SessionState::paid(10_000, 1).unwrap();
        applicants.add_applicant(UserId::new(), &state).unwrap();

        let err = applicants.add_applicant(UserId::new(), &state).unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { capacity: 1 });
        assert_eq!(applicants.size(), 1);
    }

    #[test]
    fn free_sessions_have_no_limit() {
        let mut applicants = Applicants::new();
        let state = SessionState::free();
        for _ in 0..500 {
            applicants.add_applicant(UserId::new(), &state).unwrap();
        }
        assert_eq!(applicants.size(), 500);
    }
}
