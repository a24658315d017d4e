use thiserror::Error;

use crate::models::Slot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Malformed {slot} time '{value}' on {date} (expected HH:MM)")]
    MalformedTime {
        date: String,
        slot: Slot,
        value: String,
    },

    #[error("Malformed month-day key '{0}' (expected MM-DD)")]
    MalformedDate(String),

    #[error("Invalid table name '{0}': only letters, digits and '_' are allowed")]
    InvalidTable(String),
}
