//! End-of-session summary message building.

use crate::error::OhayoError;
use crate::session::{format_hm, WorkRecord};

/// Build the multi-line summary body posted to Slack when a session ends.
///
/// Layout:
///
/// ```text
/// <display name>          (omitted when unset)
/// YYYY/MM/DD XhYm
/// Started: HH:MM:SS
/// Ended: HH:MM:SS
/// Paused: XhYm
/// <memo>                  (omitted when empty)
/// ```
///
/// Times are rendered in the local timezone.
///
/// # Errors
///
/// Returns [`OhayoError::Store`] if the record's pause/resume sequences are
/// not correctly paired; the `end` transition must have closed any open
/// pause before calling this.
pub fn build_summary(
    record: &WorkRecord,
    display_name: Option<&str>,
    memo: Option<&str>,
) -> Result<String, OhayoError> {
    let paused = record.total_paused()?;
    let worked = record.total_worked()?;

    let mut lines = Vec::new();
    if let Some(name) = display_name.filter(|n| !n.is_empty()) {
        lines.push(name.to_string());
    }
    lines.push(format!(
        "{} {}",
        record.start_time_local().format("%Y/%m/%d"),
        format_hm(worked)
    ));
    lines.push(format!(
        "Started: {}",
        record.start_time_local().format("%H:%M:%S")
    ));
    lines.push(format!(
        "Ended: {}",
        record.end_time_local().format("%H:%M:%S")
    ));
    lines.push(format!("Paused: {}", format_hm(paused)));
    if let Some(memo) = memo.filter(|m| !m.is_empty()) {
        lines.push(memo.to_string());
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};

    // Local timestamps so the rendered clock times are stable regardless of
    // the machine's timezone.
    fn local(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2024, 4, 1, hour, min, sec)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn full_day_record() -> WorkRecord {
        let mut record = WorkRecord::new(local(9, 0, 0));
        record.pause(local(12, 0, 0));
        record.resume(local(13, 0, 0));
        record.finish(local(18, 0, 0));
        record
    }

    #[test]
    fn test_summary_full_day_scenario() {
        let record = full_day_record();
        let body = build_summary(&record, Some("taro"), Some("daily report")).unwrap();

        assert!(body.contains("taro"));
        assert!(body.contains("2024/04/01 8h0m"));
        assert!(body.contains("Started: 09:00:00"));
        assert!(body.contains("Ended: 18:00:00"));
        assert!(body.contains("Paused: 1h0m"));
        assert!(body.contains("daily report"));
    }

    #[test]
    fn test_summary_omits_unset_name_and_memo() {
        let record = full_day_record();
        let body = build_summary(&record, None, None).unwrap();

        let first_line = body.lines().next().unwrap();
        assert!(first_line.starts_with("2024/04/01"));
        assert_eq!(body.lines().count(), 4);
    }

    #[test]
    fn test_summary_no_pauses() {
        let mut record = WorkRecord::new(local(9, 0, 0));
        record.finish(local(17, 30, 0));

        let body = build_summary(&record, None, None).unwrap();

        assert!(body.contains("8h30m"));
        assert!(body.contains("Paused: 0h0m"));
    }

    #[test]
    fn test_summary_rejects_broken_pairing() {
        let mut record = full_day_record();
        record.resume_times.pop();

        assert!(build_summary(&record, None, None).is_err());
    }
}
