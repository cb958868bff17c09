//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters living outside this crate provide concrete implementations.

pub mod payment;
pub mod repositories;

pub use payment::Payment;
pub use repositories::{ApplyRepository, PaymentRepository, SessionRepository};
