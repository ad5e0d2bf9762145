//! Configuration subcommands: set-token, set-channel-id, set-name.
//!
//! Each upserts one `KEY=value` line in the env file.

use crate::config::{EnvFile, Paths, KEY_CHANNEL_ID, KEY_NAME, KEY_TOKEN};
use crate::error::OhayoError;

/// Store the Slack bot token.
///
/// # Errors
///
/// Returns an error if the env file cannot be written.
pub fn set_token(paths: &Paths, value: &str) -> Result<String, OhayoError> {
    EnvFile::new(&paths.env_file).set(KEY_TOKEN, value)?;
    Ok("Slack token saved.".to_string())
}

/// Store the target channel id.
///
/// # Errors
///
/// Returns an error if the env file cannot be written.
pub fn set_channel_id(paths: &Paths, value: &str) -> Result<String, OhayoError> {
    EnvFile::new(&paths.env_file).set(KEY_CHANNEL_ID, value)?;
    Ok("Slack channel id saved.".to_string())
}

/// Store the display name used in the summary header.
///
/// # Errors
///
/// Returns an error if the env file cannot be written.
pub fn set_name(paths: &Paths, value: &str) -> Result<String, OhayoError> {
    EnvFile::new(&paths.env_file).set(KEY_NAME, value)?;
    Ok("Display name saved.".to_string())
}
