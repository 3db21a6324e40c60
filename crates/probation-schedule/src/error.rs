//! Error types for probation-schedule operations.
//!
//! Only timestamp handling can fail. Policy checks never return errors: a
//! rejected appointment is an ordinary [`Decision`](crate::Decision).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Local time {0} does not exist in America/Chicago (DST gap)")]
    NonexistentLocalTime(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
