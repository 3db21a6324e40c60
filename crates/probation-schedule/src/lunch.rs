//! Lunch lockout on walk-in days.
//!
//! The office closes 12:00-13:00 and anyone arriving after 11:30 will not be
//! seen before lunch. Times strictly between 11:30 and 13:00 are rejected;
//! 11:30 and 13:00 themselves are accepted. Arrivals in 11:00-11:30
//! (inclusive) are accepted with an advisory.

use crate::clock::CivilTime;
use crate::day::{classify_day, DayCategory};
use crate::decision::Decision;
use crate::hours::{LUNCH_CUTOFF, LUNCH_END, LUNCH_WARNING_START};

/// Marker that prefixes every lockout rejection.
pub const LUNCH_LOCKOUT_MARKER: &str = "LUNCH LOCKOUT";

/// Check `at` against the lunch lockout.
///
/// Only walk-in days are subject to the lockout. On any other day this
/// returns an allowed decision saying so, which is not a statement that the
/// office is open: gate on [`is_office_open`](crate::is_office_open) first.
pub fn check_lunch_lockout<T: CivilTime>(at: &T) -> Decision {
    if classify_day(at) != DayCategory::WalkIn {
        return Decision::allow("Lunch lockout does not apply to this day.");
    }

    let time = at.civil_time();

    if LUNCH_CUTOFF < time && time < LUNCH_END {
        log::debug!("lunch lockout at {}", time);
        return Decision::deny(format!(
            "{}: Office is closed from 12:00 PM to 1:00 PM. \
             To be seen before lunch, you must arrive by 11:30 AM. \
             Please schedule for 11:30 AM or earlier, or 1:00 PM or later.",
            LUNCH_LOCKOUT_MARKER
        ));
    }

    // Overlaps the lockout bound at exactly 11:30; the advisory wins there.
    if (LUNCH_WARNING_START..=LUNCH_CUTOFF).contains(&time) {
        return Decision::allow("Appointment scheduled.").with_warning(
            "Note: Office closes for lunch at 12:00 PM. Arrive by 11:30 AM to be seen before lunch.",
        );
    }

    Decision::allow("No lunch lockout conflict.")
}
