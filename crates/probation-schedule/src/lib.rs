//! # probation-schedule
//!
//! Appointment-eligibility rules for a probation office's walk-in and
//! phone-reporting schedule.
//!
//! Every check is a pure function of a civil timestamp in America/Chicago
//! and returns a [`Decision`]. A rejected request is an ordinary value, never
//! an error; the only fallible operations are in [`clock`] and deal with
//! turning caller input into a timestamp.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use probation_schedule::{classify_day, validate_appointment, DayCategory};
//!
//! let at = NaiveDate::from_ymd_opt(2025, 1, 20)
//!     .unwrap()
//!     .and_hms_opt(11, 45, 0)
//!     .unwrap();
//! assert_eq!(classify_day(&at), DayCategory::WalkIn);
//!
//! let decision = validate_appointment(&at);
//! assert!(!decision.allowed);
//! assert!(decision.message.contains("LUNCH LOCKOUT"));
//! ```
//!
//! ## Modules
//!
//! - [`clock`] - office timezone, civil-time trait, timestamp parsing
//! - [`hours`] - fixed time-of-day boundaries
//! - [`day`] - `DayCategory` classification
//! - [`decision`] - the `Decision` result record
//! - [`office`] - walk-in hours per day category
//! - [`lunch`] - lunch lockout on walk-in days
//! - [`reschedule`] - makeup dates after a missed appointment
//! - [`validate`] - office hours and lunch lockout combined
//! - [`notices`] - Friday, payment and unknown-caller notices
//! - [`call`] - ordering of agent lines for one caller turn
//! - [`error`] - error types

pub mod call;
pub mod clock;
pub mod day;
pub mod decision;
pub mod error;
pub mod hours;
pub mod lunch;
pub mod notices;
pub mod office;
pub mod reschedule;
pub mod validate;

pub use call::{caller_script, CallerFacts, ScriptLine};
pub use clock::{localize, parse_timestamp, CivilTime, OFFICE_TZ};
pub use day::{classify_day, DayCategory};
pub use decision::Decision;
pub use error::ScheduleError;
pub use lunch::check_lunch_lockout;
pub use notices::{friday_instruction, payment_message};
pub use office::is_office_open;
pub use reschedule::missed_appointment_options;
pub use validate::validate_appointment;
