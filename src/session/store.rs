//! Persistence for the current-session record.
//!
//! The record is stored as a tabular file with fixed columns and exactly one
//! data row:
//!
//! ```text
//! start_time,pause_times,resume_times,end_time,is_paused,is_end
//! 2024-04-01T09:00:00+00:00,...;...,...;...,2024-04-01T18:00:00+00:00,false,true
//! ```
//!
//! Timestamps are RFC 3339 in UTC. Sequence columns join their entries with
//! `;`; an empty sequence is an empty field. The encoding is private to this
//! module so it can be swapped without touching the state machine.
//!
//! No locking: ohayo assumes sequential, human-paced invocations. Two
//! processes racing on the same store can corrupt it.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::Paths;
use crate::error::OhayoError;
use crate::session::record::WorkRecord;

const HEADER: &str = "start_time,pause_times,resume_times,end_time,is_paused,is_end";
const SEQUENCE_DELIMITER: char = ';';

/// Reads and writes the single current-session record.
#[derive(Debug, Clone)]
pub struct RecordStore {
    current: PathBuf,
    logs: PathBuf,
}

impl RecordStore {
    /// Create a store rooted at the given paths.
    #[must_use]
    pub fn new(paths: &Paths) -> Self {
        Self {
            current: paths.current_record.clone(),
            logs: paths.logs.clone(),
        }
    }

    /// Load the current record.
    ///
    /// # Errors
    ///
    /// Returns [`OhayoError::NotFound`] if no record file exists, and
    /// [`OhayoError::Store`] if the file does not contain exactly one
    /// well-formed data row.
    pub fn load(&self) -> Result<WorkRecord, OhayoError> {
        if !self.current.exists() {
            return Err(OhayoError::NotFound(
                "no work session has been recorded".to_string(),
            ));
        }

        let contents = std::fs::read_to_string(&self.current)?;
        decode(&contents)
    }

    /// Save the record, overwriting any previous content entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, record: &WorkRecord) -> Result<(), OhayoError> {
        std::fs::write(&self.current, encode(record)).map_err(|e| {
            OhayoError::Store(format!(
                "failed to write {}: {e}",
                self.current.display()
            ))
        })
    }

    /// Archive an ended record under its start date and remove the current
    /// file, making room for a new session.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be written.
    pub fn archive(&self, record: &WorkRecord) -> Result<PathBuf, OhayoError> {
        let name = record.start_time_local().format("%Y-%m-%d.csv").to_string();
        let target = self.logs.join(name);

        std::fs::write(&target, encode(record)).map_err(|e| {
            OhayoError::Store(format!("failed to archive to {}: {e}", target.display()))
        })?;
        if self.current.exists() {
            std::fs::remove_file(&self.current)?;
        }
        Ok(target)
    }
}

fn encode(record: &WorkRecord) -> String {
    let row = [
        record.start_time.to_rfc3339(),
        encode_sequence(&record.pause_times),
        encode_sequence(&record.resume_times),
        record.end_time.to_rfc3339(),
        record.is_paused.to_string(),
        record.is_end.to_string(),
    ]
    .join(",");

    format!("{HEADER}\n{row}\n")
}

fn encode_sequence(times: &[DateTime<Utc>]) -> String {
    times
        .iter()
        .map(DateTime::to_rfc3339)
        .collect::<Vec<_>>()
        .join(&SEQUENCE_DELIMITER.to_string())
}

fn decode(contents: &str) -> Result<WorkRecord, OhayoError> {
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| OhayoError::Store("record file is empty".to_string()))?;
    if header.trim() != HEADER {
        return Err(OhayoError::Store(format!(
            "unexpected record header: {header}"
        )));
    }

    let row = lines
        .next()
        .ok_or_else(|| OhayoError::Store("record file has no data row".to_string()))?;
    if lines.next().is_some() {
        return Err(OhayoError::Store(
            "record file must contain exactly one data row".to_string(),
        ));
    }

    let fields: Vec<&str> = row.split(',').collect();
    if fields.len() != 6 {
        return Err(OhayoError::Store(format!(
            "expected 6 columns, found {}",
            fields.len()
        )));
    }

    Ok(WorkRecord {
        start_time: decode_timestamp(fields[0])?,
        pause_times: decode_sequence(fields[1])?,
        resume_times: decode_sequence(fields[2])?,
        end_time: decode_timestamp(fields[3])?,
        is_paused: decode_bool(fields[4])?,
        is_end: decode_bool(fields[5])?,
    })
}

fn decode_timestamp(field: &str) -> Result<DateTime<Utc>, OhayoError> {
    DateTime::parse_from_rfc3339(field.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| OhayoError::Store(format!("invalid timestamp '{field}': {e}")))
}

fn decode_sequence(field: &str) -> Result<Vec<DateTime<Utc>>, OhayoError> {
    if field.trim().is_empty() {
        return Ok(Vec::new());
    }
    field
        .split(SEQUENCE_DELIMITER)
        .map(decode_timestamp)
        .collect()
}

fn decode_bool(field: &str) -> Result<bool, OhayoError> {
    match field.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(OhayoError::Store(format!("invalid boolean '{other}'"))),
    }
}
