//! Session transition commands: start, pause, resume, end, status.
//!
//! Preconditions are checked here by reading the current record. A command
//! issued in the wrong state prints an informational notice and succeeds;
//! a missing or malformed record is a hard stop for everything but `start`.

use chrono::Utc;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::OhayoError;
use crate::notify::{build_summary, PostedMessage, SlackClient};
use crate::output::to_json;
use crate::session::{format_hm, RecordStore, SessionState, WorkRecord};

/// Begin a new work session.
///
/// If an unfinished session exists this is a no-op with a notice. An ended
/// session is archived under its start date before the new record is
/// created.
///
/// # Errors
///
/// Returns an error if the record cannot be persisted.
pub fn start(paths: &Paths, format: OutputFormat) -> Result<String, OhayoError> {
    let store = RecordStore::new(paths);

    match store.load() {
        Ok(record) if !record.is_end => {
            return Ok("Work is already started.".yellow().to_string());
        }
        Ok(record) => {
            store.archive(&record)?;
        }
        // Absent or unreadable record: treat as no active session.
        Err(_) => {}
    }

    let record = WorkRecord::started_now();
    store.save(&record)?;

    match format {
        OutputFormat::Json => to_json(&record),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(
                format!(
                    "🌅 Work session started at {}.",
                    record.start_time_local().format("%H:%M")
                )
                .green()
                .to_string(),
            );
            output.push(String::new());
            output.push("   Use 'ohayo pause' when you take a break".dimmed().to_string());
            output.push("   Use 'ohayo end' when you are done".dimmed().to_string());
            Ok(output.join("\n"))
        }
    }
}

/// Pause the running session.
///
/// # Errors
///
/// Returns [`OhayoError::NotFound`] if no session record exists, or an
/// error if the record is malformed or cannot be persisted.
pub fn pause(paths: &Paths, format: OutputFormat) -> Result<String, OhayoError> {
    let store = RecordStore::new(paths);
    let mut record = store.load()?;

    match record.state() {
        SessionState::Ended => return Ok("Work has already ended.".yellow().to_string()),
        SessionState::Paused => return Ok("Work is already paused.".yellow().to_string()),
        SessionState::Running => {}
    }

    let now = Utc::now();
    record.pause(now);
    store.save(&record)?;

    match format {
        OutputFormat::Json => to_json(&record),
        OutputFormat::Pretty => Ok(format!(
            "☕ Work paused after {}.\n   Use 'ohayo resume' to continue",
            format_hm(record.worked_until(now))
        )),
    }
}

/// Resume a paused session.
///
/// # Errors
///
/// Returns [`OhayoError::NotFound`] if no session record exists, or an
/// error if the record is malformed or cannot be persisted.
pub fn resume(paths: &Paths, format: OutputFormat) -> Result<String, OhayoError> {
    let store = RecordStore::new(paths);
    let mut record = store.load()?;

    match record.state() {
        SessionState::Ended => return Ok("Work has already ended.".yellow().to_string()),
        SessionState::Running => return Ok("Work is not paused.".yellow().to_string()),
        SessionState::Paused => {}
    }

    record.resume(Utc::now());
    store.save(&record)?;

    match format {
        OutputFormat::Json => to_json(&record),
        OutputFormat::Pretty => Ok("▶️  Work resumed. Welcome back!".to_string()),
    }
}

/// End the session, persist it, and post the summary to Slack.
///
/// The record is saved before the notification is attempted, so a failed
/// post never loses session data; the failure is reported separately and
/// the command still succeeds.
///
/// # Errors
///
/// Returns [`OhayoError::NotFound`] if no session record exists, or an
/// error if the record is malformed or cannot be persisted.
pub fn end(
    paths: &Paths,
    config: &Config,
    memo: Option<&str>,
    format: OutputFormat,
) -> Result<String, OhayoError> {
    let store = RecordStore::new(paths);
    let mut record = store.load()?;

    if record.is_end {
        return Ok("Work has already ended.".yellow().to_string());
    }

    record.finish(Utc::now());
    store.save(&record)?;

    let body = build_summary(&record, config.display_name.as_deref(), memo)?;
    let posted = post_summary(config, &body);

    match format {
        OutputFormat::Json => {
            let notification = match &posted {
                Ok(msg) => json!({ "ok": true, "channel": msg.channel, "ts": msg.ts }),
                Err(e) => json!({ "ok": false, "error": e.to_string() }),
            };
            to_json(&json!({ "record": record, "notification": notification }))
        }
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push("🌙 Work session ended.".green().to_string());
            output.push(format!(
                "   Worked: {} (paused {})",
                format_hm(record.total_worked()?),
                format_hm(record.total_paused()?)
            ));
            match posted {
                Ok(PostedMessage { channel, ts }) => {
                    output.push(format!("   Posted to Slack. Channel: {channel}, Timestamp: {ts}"));
                }
                Err(e) => {
                    output.push(format!("   Slack notification failed: {e}").yellow().to_string());
                }
            }
            Ok(output.join("\n"))
        }
    }
}

/// Show the current session's state and elapsed times.
///
/// # Errors
///
/// Returns an error if the record exists but is malformed.
pub fn status(paths: &Paths, format: OutputFormat) -> Result<String, OhayoError> {
    let store = RecordStore::new(paths);

    let record = match store.load() {
        Ok(record) => record,
        Err(OhayoError::NotFound(_)) => {
            return match format {
                OutputFormat::Json => Ok("null".to_string()),
                OutputFormat::Pretty => {
                    Ok("No work session recorded.\n\nStart one with: ohayo start".to_string())
                }
            };
        }
        Err(e) => return Err(e),
    };

    match format {
        OutputFormat::Json => to_json(&record),
        OutputFormat::Pretty => {
            let now = Utc::now();
            let state_icon = match record.state() {
                SessionState::Running => "▶️",
                SessionState::Paused => "⏸️",
                SessionState::Ended => "🌙",
            };

            let mut output = Vec::new();
            output.push(format!("{state_icon} Work session"));
            output.push("─".repeat(40));
            output.push(format!("State:    {}", record.state()));
            output.push(format!(
                "Started:  {}",
                record.start_time_local().format("%Y/%m/%d %H:%M:%S")
            ));
            if record.is_end {
                output.push(format!(
                    "Ended:    {}",
                    record.end_time_local().format("%Y/%m/%d %H:%M:%S")
                ));
            }
            output.push(format!("Worked:   {}", format_hm(record.worked_until(now))));
            output.push(format!("Paused:   {}", format_hm(record.paused_until(now))));
            Ok(output.join("\n"))
        }
    }
}

fn post_summary(config: &Config, body: &str) -> Result<PostedMessage, OhayoError> {
    let client = match &config.api_base {
        Some(base) => SlackClient::with_base_url(base, &config.token),
        None => SlackClient::new(&config.token),
    }?;
    client.post_message(&config.channel_id, body)
}
