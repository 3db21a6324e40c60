//! Tests for caller-turn routing.

use chrono::{NaiveDate, NaiveDateTime};
use probation_schedule::{caller_script, friday_instruction, CallerFacts, ScriptLine};

fn at(month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn caller() -> CallerFacts {
    CallerFacts {
        full_name: "John Doe".to_string(),
        ..CallerFacts::default()
    }
}

#[test]
fn greeting_uses_first_name() {
    let lines = caller_script(&at(1, 20, 9, 0), &caller());
    assert!(lines[0].text().starts_with("Hello John!"));
}

#[test]
fn blank_name_falls_back() {
    let facts = CallerFacts::default();
    assert_eq!(facts.first_name(), "there");
}

#[test]
fn friday_reads_phone_instruction() {
    let lines = caller_script(&at(1, 24, 10, 0), &caller());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], ScriptLine::Agent(friday_instruction().to_string()));
}

#[test]
fn friday_with_scheduled_appointment_confirms_check_in() {
    let facts = CallerFacts {
        next_appointment: Some(at(1, 27, 9, 0)),
        ..caller()
    };
    let lines = caller_script(&at(1, 24, 10, 0), &facts);
    assert_eq!(lines.len(), 3);
    assert!(lines[2].text().contains("phone check-in as complete"));
}

#[test]
fn closed_office_reads_rejection_only() {
    let facts = CallerFacts {
        has_missed: true,
        ..caller()
    };
    let lines = caller_script(&at(1, 21, 10, 0), &facts);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].text().contains("court obligations"));
}

#[test]
fn lunch_lockout_reads_lockout_message() {
    let lines = caller_script(&at(1, 20, 12, 0), &caller());
    assert_eq!(lines.len(), 2);
    assert!(lines[1].text().contains("LUNCH LOCKOUT"));
}

#[test]
fn open_office_adds_warning_appointment_and_missed_options() {
    let facts = CallerFacts {
        has_missed: true,
        next_appointment: Some(at(1, 22, 14, 30)),
        ..caller()
    };
    let lines = caller_script(&at(1, 20, 11, 15), &facts);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1].text(), "Office is open for walk-in appointments.");
    assert!(lines[2].is_warning());
    assert!(lines[2].text().contains("lunch"));
    assert_eq!(
        lines[3].text(),
        "You have an upcoming appointment scheduled for Wednesday, January 22 at 02:30 PM."
    );
    assert!(lines[4].is_warning());
    assert!(lines[4].text().contains("Monday or Wednesday only"));
}

#[test]
fn payment_info_is_appended_last() {
    let facts = CallerFacts {
        wants_payment_info: true,
        ..caller()
    };
    let lines = caller_script(&at(1, 21, 10, 0), &facts);
    assert!(lines.last().unwrap().text().contains("CASH ONLY"));
}

#[test]
fn script_lines_serialize_with_kind_tag() {
    let json = serde_json::to_value(ScriptLine::Warning("careful".to_string())).unwrap();
    assert_eq!(json["kind"], "warning");
    assert_eq!(json["text"], "careful");
}
