//! Runtime configuration for ohayo.
//!
//! Built once at startup from the env file and passed by parameter into the
//! components that need it.

use crate::config::{EnvFile, Paths};
use crate::error::OhayoError;

/// Env file key for the Slack bot token.
pub const KEY_TOKEN: &str = "SLACK_TOKEN";
/// Env file key for the target channel id.
pub const KEY_CHANNEL_ID: &str = "SLACK_CHANNEL_ID";
/// Env file key for the optional display name.
pub const KEY_NAME: &str = "SLACK_NAME";
/// Env file key for an alternate Slack API root (used by tests).
pub const KEY_API_BASE: &str = "SLACK_API_BASE";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slack bot token, sent as a bearer token.
    pub token: String,
    /// Channel the end-of-session summary is posted to.
    pub channel_id: String,
    /// Display name shown at the top of the summary, if set.
    pub display_name: Option<String>,
    /// Alternate API root; `None` means the public Slack API.
    pub api_base: Option<String>,
}

impl Config {
    /// Load the configuration from the env file.
    ///
    /// # Errors
    ///
    /// Returns [`OhayoError::Config`] if the token or channel id is not set.
    pub fn load(paths: &Paths) -> Result<Self, OhayoError> {
        let env = EnvFile::new(&paths.env_file);

        let token = require(&env, KEY_TOKEN, "ohayo set-token")?;
        let channel_id = require(&env, KEY_CHANNEL_ID, "ohayo set-channel-id")?;
        let display_name = env.get(KEY_NAME)?.filter(|v| !v.is_empty());
        let api_base = env.get(KEY_API_BASE)?.filter(|v| !v.is_empty());

        Ok(Self {
            token,
            channel_id,
            display_name,
            api_base,
        })
    }
}

fn require(env: &EnvFile, key: &str, hint: &str) -> Result<String, OhayoError> {
    env.get(key)?
        .filter(|v| !v.is_empty())
        .ok_or_else(|| OhayoError::Config(format!("{key} is not set. Run '{hint} <value>' first.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_in(temp: &TempDir) -> Paths {
        Paths::with_root(temp.path().join(".ohayo"))
    }

    #[test]
    fn test_load_missing_token_fails() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        paths.ensure_dirs().unwrap();

        let err = Config::load(&paths).unwrap_err();
        assert!(err.to_string().contains(KEY_TOKEN));
    }

    #[test]
    fn test_load_missing_channel_fails() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        paths.ensure_dirs().unwrap();
        EnvFile::new(&paths.env_file).set(KEY_TOKEN, "xoxb-1").unwrap();

        let err = Config::load(&paths).unwrap_err();
        assert!(err.to_string().contains(KEY_CHANNEL_ID));
    }

    #[test]
    fn test_load_complete_config() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        paths.ensure_dirs().unwrap();

        let env = EnvFile::new(&paths.env_file);
        env.set(KEY_TOKEN, "xoxb-1").unwrap();
        env.set(KEY_CHANNEL_ID, "C0123").unwrap();
        env.set(KEY_NAME, "taro").unwrap();

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.token, "xoxb-1");
        assert_eq!(config.channel_id, "C0123");
        assert_eq!(config.display_name, Some("taro".to_string()));
        assert_eq!(config.api_base, None);
    }

    #[test]
    fn test_name_is_optional() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        paths.ensure_dirs().unwrap();

        let env = EnvFile::new(&paths.env_file);
        env.set(KEY_TOKEN, "xoxb-1").unwrap();
        env.set(KEY_CHANNEL_ID, "C0123").unwrap();

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.display_name, None);
    }
}
