//! Walk-in office hours by day category.
//!
//! | Category      | Open window                         |
//! |---------------|-------------------------------------|
//! | WalkIn        | 08:00 through the 16:30 last slot   |
//! | LateThursday  | 17:00 through 19:30, both inclusive |
//! | PhoneOnly     | never (phone reporting)             |
//! | CourtDay      | never                               |

use crate::clock::CivilTime;
use crate::day::{classify_day, DayCategory};
use crate::decision::Decision;
use crate::hours::{AFTER_HOURS_END, AFTER_HOURS_START, LAST_APPOINTMENT, OFFICE_OPEN};

/// Check whether the office takes walk-ins at `at`.
pub fn is_office_open<T: CivilTime>(at: &T) -> Decision {
    let time = at.civil_time();

    let decision = match classify_day(at) {
        DayCategory::WalkIn => {
            if time < OFFICE_OPEN {
                Decision::deny("Office opens at 8:00 AM. Please schedule after that time.")
            } else if time > LAST_APPOINTMENT {
                Decision::deny(
                    "The last appointment slot is 4:30 PM. Please choose an earlier time.",
                )
            } else {
                Decision::allow("Office is open for walk-in appointments.")
            }
        }
        DayCategory::LateThursday => {
            if (AFTER_HOURS_START..=AFTER_HOURS_END).contains(&time) {
                Decision::allow("After-hours appointments available (5:00 PM - 7:30 PM).")
            } else {
                Decision::deny(
                    "After-hours appointments are only from 5:00 PM to 7:30 PM on 1st and 3rd Thursday.",
                )
            }
        }
        DayCategory::PhoneOnly => Decision::deny(
            "Fridays are reserved for phone reporting only. No walk-in appointments.",
        ),
        DayCategory::CourtDay => Decision::deny(
            "Walk-in appointments are not available on this day due to court obligations. \
             Please schedule for Monday or Wednesday.",
        ),
    };

    log::debug!("office check at {}: allowed={}", time, decision.allowed);
    decision
}
