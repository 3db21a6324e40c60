//! `probation` CLI - check a timestamp against the office's reporting rules.
//!
//! ## Usage
//!
//! ```sh
//! # What kind of day is it?
//! probation day --at "2025-01-16 18:00"
//!
//! # Full validation (office hours + lunch lockout), defaults to now
//! probation validate --at "2025-01-20 11:45"
//!
//! # Machine-readable output
//! probation --json lunch --at "2025-01-20 12:30"
//!
//! # Makeup dates after a missed appointment
//! probation missed --at "2025-01-20 09:00"
//!
//! # What the agent would say to a caller
//! probation call --name "John Doe" --missed --next "2025-01-22 14:30" --at "2025-01-20 11:15"
//! ```
//!
//! Set `RUST_LOG=debug` to see each decision as it is made.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use probation_schedule::{clock, CallerFacts, Decision, ScriptLine};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "probation",
    version,
    about = "Probation office walk-in and phone-reporting rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the day (walk_in, court_day, late_thu, phone_only)
    Day {
        /// Timestamp, e.g. "2025-01-20 11:45" (defaults to now, America/Chicago)
        #[arg(long)]
        at: Option<String>,
    },
    /// Check whether the office takes walk-ins
    Office {
        #[arg(long)]
        at: Option<String>,
    },
    /// Check the lunch lockout on walk-in days
    Lunch {
        #[arg(long)]
        at: Option<String>,
    },
    /// Run the office-hours and lunch checks together
    Validate {
        #[arg(long)]
        at: Option<String>,
    },
    /// List makeup dates left this month after a missed appointment
    Missed {
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the Friday phone-reporting instruction
    Friday,
    /// Print the payment policy
    Payment,
    /// Print the agent's lines for one caller turn
    Call {
        #[arg(long)]
        at: Option<String>,
        /// Caller's full name
        #[arg(long, default_value = "")]
        name: String,
        /// Caller has a missed appointment on record
        #[arg(long)]
        missed: bool,
        /// Caller's next scheduled appointment
        #[arg(long)]
        next: Option<String>,
        /// Caller asked for payment information
        #[arg(long)]
        payment: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Day { at } => {
            let at = resolve_at(at.as_deref())?;
            let category = probation_schedule::classify_day(&at);
            if cli.json {
                print_json(&category)?;
            } else {
                println!("{}", category);
            }
        }
        Commands::Office { at } => {
            let at = resolve_at(at.as_deref())?;
            print_decision(&probation_schedule::is_office_open(&at), cli.json)?;
        }
        Commands::Lunch { at } => {
            let at = resolve_at(at.as_deref())?;
            print_decision(&probation_schedule::check_lunch_lockout(&at), cli.json)?;
        }
        Commands::Validate { at } => {
            let at = resolve_at(at.as_deref())?;
            print_decision(&probation_schedule::validate_appointment(&at), cli.json)?;
        }
        Commands::Missed { at } => {
            let at = resolve_at(at.as_deref())?;
            print_decision(
                &probation_schedule::missed_appointment_options(&at),
                cli.json,
            )?;
        }
        Commands::Friday => print_text(probation_schedule::friday_instruction(), cli.json)?,
        Commands::Payment => print_text(&probation_schedule::payment_message(), cli.json)?,
        Commands::Call {
            at,
            name,
            missed,
            next,
            payment,
        } => {
            let at = resolve_at(at.as_deref())?;
            let next_appointment = next
                .as_deref()
                .map(|raw| {
                    clock::parse_timestamp(raw)
                        .with_context(|| format!("Invalid --next timestamp: {}", raw))
                })
                .transpose()?;
            let facts = CallerFacts {
                full_name: name,
                has_missed: missed,
                next_appointment,
                wants_payment_info: payment,
            };
            let lines = probation_schedule::caller_script(&at, &facts);
            if cli.json {
                print_json(&lines)?;
            } else {
                for line in &lines {
                    print_line(line);
                }
            }
        }
    }

    Ok(())
}

/// Parse `--at`, or take the current Chicago wall time when omitted.
fn resolve_at(raw: Option<&str>) -> Result<NaiveDateTime> {
    match raw {
        Some(raw) => clock::parse_timestamp(raw)
            .with_context(|| format!("Invalid --at timestamp: {}", raw)),
        None => Ok(clock::now().naive_local()),
    }
}

fn print_decision(decision: &Decision, json: bool) -> Result<()> {
    if json {
        return print_json(decision);
    }
    println!("allowed: {}", if decision.allowed { "yes" } else { "no" });
    println!("message: {}", decision.message);
    if let Some(warning) = &decision.warning {
        println!("warning: {}", warning);
    }
    Ok(())
}

fn print_text(text: &str, json: bool) -> Result<()> {
    if json {
        print_json(&text)
    } else {
        println!("{}", text);
        Ok(())
    }
}

fn print_line(line: &ScriptLine) {
    match line {
        ScriptLine::Agent(text) => println!("[AGENT] {}", text),
        ScriptLine::Warning(text) => println!("[WARNING] {}", text),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", pretty);
    Ok(())
}
