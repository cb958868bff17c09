//! Session pricing and capacity policy
//!
//! Whether a session is paid is a property of its state, not of a separate
//! session type hierarchy.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Whether applying to a session costs money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Free,
    Charged,
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::Free => write!(f, "free"),
            SessionType::Charged => write!(f, "charged"),
        }
    }
}

impl std::str::FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(SessionType::Free),
            "charged" | "paid" => Ok(SessionType::Charged),
            _ => Err(format!("Unknown session type: {}", s)),
        }
    }
}

/// Price and capacity of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionState {
    session_type: SessionType,
    /// Price in the smallest currency unit; always 0 for free sessions
    price: u64,
    /// Maximum number of applicants; `None` means unlimited
    capacity: Option<u32>,
}

impl SessionState {
    /// A free session with no applicant limit
    pub fn free() -> Self {
        Self {
            session_type: SessionType::Free,
            price: 0,
            capacity: None,
        }
    }

    /// A paid session with a fixed price and applicant limit
    pub fn paid(price: u64, capacity: u32) -> Result<Self, DomainError> {
        if price == 0 {
            return Err(DomainError::Validation(
                "Charged sessions must have a price greater than zero".to_string(),
            ));
        }
        if capacity == 0 {
            return Err(DomainError::Validation(
                "Charged sessions must accept at least one applicant".to_string(),
            ));
        }
        Ok(Self {
            session_type: SessionType::Charged,
            price,
            capacity: Some(capacity),
        })
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Whether applicants must pay before enrolling
    pub fn charged(&self) -> bool {
        self.session_type == SessionType::Charged
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    /// Check if a paid amount is exactly the configured price
    pub fn same_amount(&self, amount: u64) -> bool {
        self.price == amount
    }

    /// Check if one more applicant fits given the current count
    pub fn has_room_for(&self, current: usize) -> bool {
        match self.capacity {
            Some(capacity) => current < capacity as usize,
            None => true,
        }
    }
}
