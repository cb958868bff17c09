//! Session duration
//!
//! The inclusive date range a session runs for. Status transitions are
//! checked against these boundaries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::DomainError;

/// Start/end dates of a session, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duration {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Duration {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::InvalidDuration {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// True when the session has already started on `date`
    pub fn start_date_is_same_or_before(&self, date: NaiveDate) -> bool {
        self.start_date <= date
    }

    /// True when the session is still running on `date`
    pub fn end_date_is_same_or_after(&self, date: NaiveDate) -> bool {
        self.end_date >= date
    }

    /// Check whether `date` falls strictly before the first day
    pub fn is_before_start(&self, date: NaiveDate) -> bool {
        !self.start_date_is_same_or_before(date)
    }

    /// Check whether the last day has been reached by `date`
    pub fn has_ended_by(&self, date: NaiveDate) -> bool {
        date >= self.end_date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
