//! Course session enrollment core
//!
//! Domain rules for course sessions: lifecycle transitions gated by the
//! session's dates, and payment-checked enrollment.
//! Uses hexagonal (ports & adapters) architecture; persistence and payment
//! adapters live outside this crate.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;

#[cfg(test)]
mod test_utils;


pub use app::EnrollmentService;
pub use config::Config;
pub use error::DomainError;
