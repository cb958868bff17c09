//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Sessions and the value objects they are built from
//! - `ports`: Trait definitions for external collaborators
//!   (payments, persistence)

pub mod entities;
pub mod ports;
