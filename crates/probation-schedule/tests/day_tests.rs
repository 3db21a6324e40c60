//! Tests for day classification.

use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use probation_schedule::day::weekday_ordinal;
use probation_schedule::{classify_day, DayCategory, OFFICE_TZ};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

// ── Weekday mapping ─────────────────────────────────────────────────────────

#[test]
fn monday_and_wednesday_are_walk_in() {
    assert_eq!(classify_day(&at(2025, 1, 20, 9, 0)), DayCategory::WalkIn);
    assert_eq!(classify_day(&at(2025, 1, 22, 9, 0)), DayCategory::WalkIn);
}

#[test]
fn friday_is_phone_only() {
    assert_eq!(classify_day(&at(2025, 1, 24, 10, 0)), DayCategory::PhoneOnly);
}

#[test]
fn tuesday_and_weekend_are_court_days() {
    assert_eq!(classify_day(&at(2025, 1, 21, 9, 0)), DayCategory::CourtDay);
    assert_eq!(classify_day(&at(2025, 1, 25, 9, 0)), DayCategory::CourtDay);
    assert_eq!(classify_day(&at(2025, 1, 26, 9, 0)), DayCategory::CourtDay);
}

// ── Late Thursday detection ─────────────────────────────────────────────────

#[test]
fn first_and_third_thursday_are_late() {
    // January 2025 Thursdays: 2, 9, 16, 23, 30
    assert_eq!(classify_day(&at(2025, 1, 2, 18, 0)), DayCategory::LateThursday);
    assert_eq!(classify_day(&at(2025, 1, 16, 18, 0)), DayCategory::LateThursday);
}

#[test]
fn second_fourth_and_fifth_thursday_are_court_days() {
    assert_eq!(classify_day(&at(2025, 1, 9, 18, 0)), DayCategory::CourtDay);
    assert_eq!(classify_day(&at(2025, 1, 23, 18, 0)), DayCategory::CourtDay);
    assert_eq!(classify_day(&at(2025, 1, 30, 18, 0)), DayCategory::CourtDay);
}

#[test]
fn late_thursday_on_day_seven_and_twenty_one() {
    // May 2026 starts on a Friday: Thursdays are 7, 14, 21, 28.
    assert_eq!(classify_day(&at(2026, 5, 7, 18, 0)), DayCategory::LateThursday);
    assert_eq!(classify_day(&at(2026, 5, 14, 18, 0)), DayCategory::CourtDay);
    assert_eq!(classify_day(&at(2026, 5, 21, 18, 0)), DayCategory::LateThursday);
}

#[test]
fn weekday_ordinal_boundaries() {
    assert_eq!(weekday_ordinal(1), 1);
    assert_eq!(weekday_ordinal(7), 1);
    assert_eq!(weekday_ordinal(8), 2);
    assert_eq!(weekday_ordinal(15), 3);
    assert_eq!(weekday_ordinal(21), 3);
    assert_eq!(weekday_ordinal(22), 4);
    assert_eq!(weekday_ordinal(29), 5);
}

// ── Zoned input ─────────────────────────────────────────────────────────────

#[test]
fn zoned_and_naive_inputs_agree() {
    let naive = at(2025, 1, 16, 18, 0);
    let zoned = OFFICE_TZ.from_local_datetime(&naive).unwrap();
    assert_eq!(classify_day(&zoned), classify_day(&naive));
}

#[test]
fn identifiers_match_serde_form() {
    for category in [
        DayCategory::WalkIn,
        DayCategory::CourtDay,
        DayCategory::LateThursday,
        DayCategory::PhoneOnly,
    ] {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category));
    }
    assert_eq!(DayCategory::LateThursday.to_string(), "late_thu");
}

#[test]
fn walk_in_acceptance_by_category() {
    assert!(DayCategory::WalkIn.accepts_walk_ins());
    assert!(DayCategory::LateThursday.accepts_walk_ins());
    assert!(!DayCategory::PhoneOnly.accepts_walk_ins());
    assert!(!DayCategory::CourtDay.accepts_walk_ins());
}
