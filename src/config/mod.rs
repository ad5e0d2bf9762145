//! Configuration management for ohayo.
//!
//! Configuration lives in a flat `KEY=value` file at `~/.ohayo/env`.

mod env_file;
mod paths;
mod settings;

pub use env_file::EnvFile;
pub use paths::Paths;
pub use settings::{Config, KEY_API_BASE, KEY_CHANNEL_ID, KEY_NAME, KEY_TOKEN};
