//! Civil time in the office's fixed timezone.
//!
//! All policy reasoning happens on America/Chicago wall-clock fields. Callers
//! that already hold a zoned [`DateTime`] are trusted as-is; naive timestamps
//! are taken to be Chicago wall time already (the zone is assigned, never
//! converted into).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// The office's civil timezone.
pub const OFFICE_TZ: Tz = chrono_tz::America::Chicago;

/// Accepted naive input layouts, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// A point in time that can report its civil date and time-of-day.
///
/// The evaluator never inspects offsets. For a `DateTime` in some other zone
/// the wall fields of *that* zone are used, so convert before evaluating if
/// that is not what you want.
pub trait CivilTime {
    fn civil_date(&self) -> NaiveDate;
    fn civil_time(&self) -> NaiveTime;
}

impl CivilTime for NaiveDateTime {
    fn civil_date(&self) -> NaiveDate {
        self.date()
    }

    fn civil_time(&self) -> NaiveTime {
        self.time()
    }
}

impl<Z: TimeZone> CivilTime for DateTime<Z> {
    fn civil_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn civil_time(&self) -> NaiveTime {
        self.naive_local().time()
    }
}

impl<T: CivilTime + ?Sized> CivilTime for &T {
    fn civil_date(&self) -> NaiveDate {
        (**self).civil_date()
    }

    fn civil_time(&self) -> NaiveTime {
        (**self).civil_time()
    }
}

/// Current instant in the office timezone.
pub fn now() -> DateTime<Tz> {
    Utc::now().with_timezone(&OFFICE_TZ)
}

/// Attach the office timezone to a naive wall time.
///
/// An ambiguous wall time (the repeated hour when DST ends) resolves to the
/// earlier instant.
///
/// # Errors
/// Returns `ScheduleError::NonexistentLocalTime` for wall times skipped by the
/// spring-forward transition.
pub fn localize(naive: &NaiveDateTime) -> Result<DateTime<Tz>> {
    OFFICE_TZ
        .from_local_datetime(naive)
        .earliest()
        .ok_or_else(|| ScheduleError::NonexistentLocalTime(naive.to_string()))
}

/// Parse a caller-supplied timestamp into office wall time.
///
/// Accepts `YYYY-MM-DD HH:MM`, the same with seconds and/or a `T` separator,
/// and RFC 3339 with an offset. Offset-carrying input is converted into
/// America/Chicago; naive input is returned untouched.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimestamp` if no layout matches.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&OFFICE_TZ).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ScheduleError::InvalidTimestamp(trimmed.to_string()))
}
