//! Full validation of a proposed appointment time.

use crate::clock::CivilTime;
use crate::decision::Decision;
use crate::lunch::check_lunch_lockout;
use crate::office::is_office_open;

/// Run the office-hours check, then the lunch lockout.
///
/// The first rejection is returned unchanged. On success, any lunch advisory
/// is carried forward as the warning.
pub fn validate_appointment<T: CivilTime>(at: &T) -> Decision {
    let office = is_office_open(at);
    if !office.allowed {
        return office;
    }

    let lunch = check_lunch_lockout(at);
    if !lunch.allowed {
        return lunch;
    }

    Decision {
        allowed: true,
        message: "Appointment time is valid.".to_string(),
        warning: lunch.warning,
    }
}
