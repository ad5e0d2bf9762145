//! ohayo - a work-time tracking CLI
//!
//! Records start/pause/resume/end events for a single work session to a
//! local file and posts a summary to a Slack channel when the session ends.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod output;
pub mod session;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::OhayoError;
