//! Routing of a single caller turn through the policy checks.
//!
//! The caller lookup and appointment history belong to the surrounding
//! session layer; it hands the relevant facts over as [`CallerFacts`]. This
//! module only decides what the agent says, in order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::CivilTime;
use crate::day::{classify_day, DayCategory};
use crate::lunch::check_lunch_lockout;
use crate::notices::{friday_instruction, payment_message};
use crate::office::is_office_open;
use crate::reschedule::missed_appointment_options;

/// What the session layer knows about the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerFacts {
    pub full_name: String,
    /// At least one appointment on record has the "missed" status.
    pub has_missed: bool,
    /// Next scheduled appointment, in office wall time.
    pub next_appointment: Option<NaiveDateTime>,
    /// Caller asked for payment information.
    pub wants_payment_info: bool,
}

impl CallerFacts {
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("there")
    }
}

/// One line of the agent's side of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ScriptLine {
    Agent(String),
    Warning(String),
}

impl ScriptLine {
    pub fn text(&self) -> &str {
        match self {
            ScriptLine::Agent(text) | ScriptLine::Warning(text) => text,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, ScriptLine::Warning(_))
    }
}

/// Produce the agent's lines for a caller reaching the office at `at`.
pub fn caller_script<T: CivilTime>(at: &T, caller: &CallerFacts) -> Vec<ScriptLine> {
    let mut lines = vec![ScriptLine::Agent(format!(
        "Hello {}! Thank you for calling Tipton County Probation. \
         I have your record on file. How can I help you today?",
        caller.first_name()
    ))];

    let category = classify_day(at);
    log::debug!(
        "routing call on {} ({}), missed={}",
        at.civil_date(),
        category,
        caller.has_missed
    );

    if category == DayCategory::PhoneOnly {
        lines.push(ScriptLine::Agent(friday_instruction().to_string()));
        if caller.next_appointment.is_some() {
            lines.push(ScriptLine::Agent(
                "I'm marking your phone check-in as complete. Thank you for reporting.".to_string(),
            ));
        }
    } else {
        let office = is_office_open(at);
        if !office.allowed {
            lines.push(ScriptLine::Agent(office.message));
        } else {
            let lunch = check_lunch_lockout(at);
            if !lunch.allowed {
                lines.push(ScriptLine::Agent(lunch.message));
            } else {
                lines.push(ScriptLine::Agent(office.message));
                if let Some(warning) = lunch.warning {
                    lines.push(ScriptLine::Warning(warning));
                }
                if let Some(next) = caller.next_appointment {
                    lines.push(ScriptLine::Agent(format!(
                        "You have an upcoming appointment scheduled for {}.",
                        next.format("%A, %B %d at %I:%M %p")
                    )));
                }
                if caller.has_missed {
                    lines.push(ScriptLine::Warning(missed_appointment_options(at).message));
                }
            }
        }
    }

    if caller.wants_payment_info {
        lines.push(ScriptLine::Agent(payment_message()));
    }

    lines
}
