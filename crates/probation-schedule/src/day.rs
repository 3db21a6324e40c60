//! Day classification for the weekly reporting schedule.
//!
//! The category depends only on a date's weekday and day-of-month. It is
//! recomputed on every query and never stored.

use std::fmt;

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::CivilTime;

/// What kind of reporting a calendar day allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCategory {
    /// Monday and Wednesday: regular walk-in hours.
    #[serde(rename = "walk_in")]
    WalkIn,
    /// Tuesday, regular Thursday and weekends: officers are in court.
    #[serde(rename = "court_day")]
    CourtDay,
    /// 1st and 3rd Thursday of the month: evening walk-ins only.
    #[serde(rename = "late_thu")]
    LateThursday,
    /// Friday: phone reporting only.
    #[serde(rename = "phone_only")]
    PhoneOnly,
}

impl DayCategory {
    /// Stable identifier, identical to the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            DayCategory::WalkIn => "walk_in",
            DayCategory::CourtDay => "court_day",
            DayCategory::LateThursday => "late_thu",
            DayCategory::PhoneOnly => "phone_only",
        }
    }

    /// Whether the office takes in-person reports at some time on this day.
    pub fn accepts_walk_ins(self) -> bool {
        matches!(self, DayCategory::WalkIn | DayCategory::LateThursday)
    }
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which occurrence of its weekday a day-of-month is (1st through 5th).
pub fn weekday_ordinal(day_of_month: u32) -> u32 {
    day_of_month.saturating_sub(1) / 7 + 1
}

/// Classify the civil date of `at`.
pub fn classify_day<T: CivilTime>(at: &T) -> DayCategory {
    let date = at.civil_date();
    let category = match date.weekday() {
        Weekday::Mon | Weekday::Wed => DayCategory::WalkIn,
        Weekday::Fri => DayCategory::PhoneOnly,
        Weekday::Thu if matches!(weekday_ordinal(date.day()), 1 | 3) => DayCategory::LateThursday,
        _ => DayCategory::CourtDay,
    };
    log::trace!("{} classified as {}", date, category);
    category
}
