//! Domain entities
//!
//! Sessions, their value objects, and the records enrollment produces.

pub mod applicants;
pub mod apply;
pub mod course;
pub mod duration;
pub mod image;
pub mod payment;
pub mod session;
pub mod session_state;
pub mod user;

pub use applicants::Applicants;
pub use apply::Apply;
pub use course::CourseId;
pub use duration::Duration;
pub use image::{
    CoverImagePolicy, Image, ImageType, Images, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MIN_IMAGE_HEIGHT,
    DEFAULT_MIN_IMAGE_WIDTH,
};
pub use payment::{PaymentId, PaymentRecord};
pub use session::{NewSession, Session, SessionId, SessionStatus, StoredSession};
pub use session_state::{SessionState, SessionType};
pub use user::UserId;
