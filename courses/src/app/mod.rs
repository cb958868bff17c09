//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod enrollment_service;

pub use enrollment_service::EnrollmentService;
