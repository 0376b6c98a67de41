//! Calendar error types.

use thiserror::Error;

use crate::types::{Date, DateError};

/// Errors from calendar resolution and date rolling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The identifier is not registered in the reference data
    #[error("Unknown holiday calendar: {0}")]
    UnknownCalendar(String),

    /// Rolling never reached a business day
    #[error("No business day found in calendar {calendar} near {date}")]
    NoBusinessDay {
        /// Calendar name
        calendar: String,
        /// Date the roll started from
        date: Date,
    },

    /// Date arithmetic failed while rolling
    #[error(transparent)]
    Date(#[from] DateError),
}
