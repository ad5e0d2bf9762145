//! The single current-session work record.
//!
//! A record is created by `start`, mutated in place by `pause`/`resume`/
//! `end`, and becomes immutable once ended. The transition guards live in
//! the command layer; the mutation methods here assume the caller has
//! already checked the state.

use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::OhayoError;

/// State of the current work session, derived from the record's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Session is actively running.
    Running,
    /// Session is paused.
    Paused,
    /// Session has been finalized.
    Ended,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}

/// One start-to-end work interval, possibly containing pause/resume
/// sub-intervals.
///
/// Invariant: while running, `pause_times` and `resume_times` have equal
/// length; while paused, `pause_times` is exactly one longer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// When the session started. Set once at creation.
    pub start_time: DateTime<Utc>,
    /// One entry appended per pause, in order.
    pub pause_times: Vec<DateTime<Utc>>,
    /// One entry appended per resume, in order.
    pub resume_times: Vec<DateTime<Utc>>,
    /// When the session ended. A placeholder until `is_end` is set.
    pub end_time: DateTime<Utc>,
    /// Whether the session is currently paused.
    pub is_paused: bool,
    /// Whether the session has been finalized.
    pub is_end: bool,
}

impl WorkRecord {
    /// Create a new record starting at the given instant.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now,
            pause_times: Vec::new(),
            resume_times: Vec::new(),
            end_time: now,
            is_paused: false,
            is_end: false,
        }
    }

    /// Create a new record starting now.
    #[must_use]
    pub fn started_now() -> Self {
        Self::new(Utc::now())
    }

    /// Current state derived from the flags.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.is_end {
            SessionState::Ended
        } else if self.is_paused {
            SessionState::Paused
        } else {
            SessionState::Running
        }
    }

    /// Record a pause at the given instant. Caller must have checked the
    /// session is running.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        self.pause_times.push(now);
        self.is_paused = true;
    }

    /// Record a resume at the given instant. Caller must have checked the
    /// session is paused.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        self.resume_times.push(now);
        self.is_paused = false;
    }

    /// Finalize the record at the given instant.
    ///
    /// An open pause interval is closed first so that pause and resume
    /// sequences stay paired.
    pub fn finish(&mut self, now: DateTime<Utc>) {
        if self.is_paused {
            self.resume_times.push(now);
            self.is_paused = false;
        }
        self.is_end = true;
        self.end_time = now;
    }

    /// Total paused duration, pairing each pause with its resume.
    ///
    /// # Errors
    ///
    /// Returns [`OhayoError::Store`] if the sequences are not the same
    /// length or a resume precedes its pause. The state machine's guards
    /// should make this impossible; a failure here means the persisted
    /// record was tampered with or corrupted.
    pub fn total_paused(&self) -> Result<Duration, OhayoError> {
        if self.pause_times.len() != self.resume_times.len() {
            return Err(OhayoError::Store(format!(
                "record has {} pauses but {} resumes",
                self.pause_times.len(),
                self.resume_times.len()
            )));
        }

        let mut total = Duration::zero();
        for (pause, resume) in self.pause_times.iter().zip(&self.resume_times) {
            if resume < pause {
                return Err(OhayoError::Store(format!(
                    "resume at {resume} precedes its pause at {pause}"
                )));
            }
            total = total + (*resume - *pause);
        }
        Ok(total)
    }

    /// Total worked duration of a finished record: end - start - paused.
    ///
    /// # Errors
    ///
    /// Returns [`OhayoError::Store`] if the pause/resume pairing is broken.
    pub fn total_worked(&self) -> Result<Duration, OhayoError> {
        Ok(self.end_time - self.start_time - self.total_paused()?)
    }

    /// Paused duration accumulated up to `now`, counting an open pause.
    /// Used for the in-progress status display.
    #[must_use]
    pub fn paused_until(&self, now: DateTime<Utc>) -> Duration {
        let mut total = Duration::zero();
        for (pause, resume) in self.pause_times.iter().zip(&self.resume_times) {
            total = total + (*resume - *pause);
        }
        if self.is_paused {
            if let Some(open) = self.pause_times.last() {
                total = total + (now - *open);
            }
        }
        total
    }

    /// Worked duration accumulated up to `now`, excluding paused time.
    #[must_use]
    pub fn worked_until(&self, now: DateTime<Utc>) -> Duration {
        let until = if self.is_end { self.end_time } else { now };
        until - self.start_time - self.paused_until(until)
    }

    /// Start time in the local timezone.
    #[must_use]
    pub fn start_time_local(&self) -> DateTime<Local> {
        self.start_time.with_timezone(&Local)
    }

    /// End time in the local timezone.
    #[must_use]
    pub fn end_time_local(&self) -> DateTime<Local> {
        self.end_time.with_timezone(&Local)
    }
}
