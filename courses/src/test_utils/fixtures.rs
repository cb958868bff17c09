//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Every session fixture runs from 2024-03-01 to 2024-03-31.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{
    CourseId, CoverImagePolicy, Duration, Image, Images, NewSession, PaymentId, PaymentRecord,
    Session, SessionId, SessionState, UserId,
};

/// Shorthand for a calendar date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A single valid 3:2 PNG cover
pub fn test_images() -> Images {
    let image = Image::new("cover.png", 100_000, 600, 400, &CoverImagePolicy::default()).unwrap();
    Images::new(vec![image]).unwrap()
}

/// March 2024
pub fn test_duration() -> Duration {
    Duration::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap()
}

/// Creation data for a free session with every field present
pub fn test_new_session() -> NewSession {
    NewSession {
        course_id: CourseId::new(),
        images: Some(test_images()),
        duration: Some(test_duration()),
        state: Some(SessionState::free()),
        creator_id: UserId::new(),
    }
}

/// Create a free session in `Ready` status
pub fn test_free_session() -> Session {
    Session::create(test_new_session(), SessionId::new(), Utc::now()).unwrap()
}

/// Create a charged session in `Ready` status
pub fn test_charged_session(price: u64, capacity: u32) -> Session {
    let new = NewSession {
        state: Some(SessionState::paid(price, capacity).unwrap()),
        ..test_new_session()
    };
    Session::create(new, SessionId::new(), Utc::now()).unwrap()
}

/// A payment by `user` for `session`
pub fn test_payment(user: UserId, session: &Session, amount: u64) -> PaymentRecord {
    PaymentRecord {
        id: PaymentId::new(),
        session_id: session.id(),
        user_id: user,
        amount,
        paid_at: Utc::now(),
    }
}
