//! Fixed time-of-day boundaries of the office's weekly policy.

use chrono::NaiveTime;

const fn hm(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid policy time"),
    }
}

/// Walk-in doors open.
pub const OFFICE_OPEN: NaiveTime = hm(8, 0);
/// Walk-in doors close. The last slot starts half an hour earlier.
pub const OFFICE_CLOSE: NaiveTime = hm(17, 0);
/// Latest walk-in start time.
pub const LAST_APPOINTMENT: NaiveTime = hm(16, 30);

/// Start of the "arrive by 11:30" advisory window.
pub const LUNCH_WARNING_START: NaiveTime = hm(11, 0);
/// Arrivals after this are not seen before lunch.
pub const LUNCH_CUTOFF: NaiveTime = hm(11, 30);
pub const LUNCH_START: NaiveTime = hm(12, 0);
pub const LUNCH_END: NaiveTime = hm(13, 0);

/// 1st & 3rd Thursday evening window, inclusive on both ends.
pub const AFTER_HOURS_START: NaiveTime = hm(17, 0);
pub const AFTER_HOURS_END: NaiveTime = hm(19, 30);
