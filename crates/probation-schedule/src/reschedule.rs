//! Rescheduling options after a missed appointment.
//!
//! Missed appointments can only be made up on a Monday or Wednesday before
//! the end of the current month. Late Thursdays are never offered.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::clock::CivilTime;
use crate::decision::Decision;

/// Maximum number of dates listed in the options message.
pub const MAX_OPTIONS: usize = 5;

/// Every Monday and Wednesday after `date`'s day, up to the end of its month.
pub fn remaining_makeup_dates(date: NaiveDate) -> Vec<NaiveDate> {
    date.iter_days()
        .skip(1)
        .take_while(|d| d.month() == date.month())
        .filter(|d| matches!(d.weekday(), Weekday::Mon | Weekday::Wed))
        .collect()
}

/// Describe the makeup dates left this month, relative to `now`.
///
/// Denied when no Monday or Wednesday remains in the month.
pub fn missed_appointment_options<T: CivilTime>(now: &T) -> Decision {
    let dates = remaining_makeup_dates(now.civil_date());
    log::debug!(
        "{} makeup dates remain after {}",
        dates.len(),
        now.civil_date()
    );

    if dates.is_empty() {
        return Decision::deny(
            "No available Monday or Wednesday slots remain this month. \
             Please contact the office to schedule for next month.",
        );
    }

    let listed: Vec<String> = dates
        .iter()
        .take(MAX_OPTIONS)
        .map(|d| d.format("%A, %B %d").to_string())
        .collect();

    Decision::allow(format!(
        "You have a missed appointment. You can reschedule for: {}. \
         Please note: Missed appointments must be rescheduled for Monday or Wednesday only.",
        listed.join(", ")
    ))
}
