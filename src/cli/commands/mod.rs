//! Command implementations for ohayo.

mod config;
mod session;
mod shell;

pub use config::{set_channel_id, set_name, set_token};
pub use session::{end, pause, resume, start, status};
pub use shell::completions;
