//! Flat `KEY=value` configuration file handling.
//!
//! The env file is a plain text file with one `KEY=value` pair per line.
//! Comments (`#`) and unknown lines are preserved on write.

use std::path::{Path, PathBuf};

use crate::error::OhayoError;

/// A flat `KEY=value` configuration file.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    /// Create a handle for an env file at the given path.
    ///
    /// The file does not need to exist yet; reads of a missing file behave
    /// as if it were empty.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Look up the value for a key.
    ///
    /// Returns `None` if the file or the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn get(&self, key: &str) -> Result<Option<String>, OhayoError> {
        let Some(contents) = self.read()? else {
            return Ok(None);
        };

        for line in contents.lines() {
            if let Some((k, v)) = parse_line(line) {
                if k == key {
                    return Ok(Some(v));
                }
            }
        }
        Ok(None)
    }

    /// Set a key to a value, rewriting the existing `KEY=` line in place or
    /// appending a new one. All other lines are preserved as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn set(&self, key: &str, value: &str) -> Result<(), OhayoError> {
        let mut lines: Vec<String> = self
            .read()?
            .map(|c| c.lines().map(str::to_string).collect())
            .unwrap_or_default();

        let mut replaced = false;
        for line in &mut lines {
            if parse_line(line).is_some_and(|(k, _)| k == key) {
                *line = format!("{key}={value}");
                replaced = true;
                break;
            }
        }
        if !replaced {
            lines.push(format!("{key}={value}"));
        }

        let mut contents = lines.join("\n");
        contents.push('\n');
        std::fs::write(&self.path, contents).map_err(|e| {
            OhayoError::Config(format!(
                "Failed to write config file {}: {e}",
                self.path.display()
            ))
        })
    }

    fn read(&self) -> Result<Option<String>, OhayoError> {
        if !self.path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&self.path).map(Some).map_err(|e| {
            OhayoError::Config(format!(
                "Failed to read config file {}: {e}",
                self.path.display()
            ))
        })
    }
}

/// Parse a single `KEY=value` line. Comments and lines without `=` yield
/// `None`.
fn parse_line(line: &str) -> Option<(&str, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env_in(dir: &TempDir) -> EnvFile {
        EnvFile::new(&dir.path().join("env"))
    }

    #[test]
    fn test_get_missing_file() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        assert_eq!(env.get("SLACK_TOKEN").unwrap(), None);
    }

    #[test]
    fn test_set_creates_file() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        env.set("SLACK_TOKEN", "xoxb-123").unwrap();

        assert_eq!(env.get("SLACK_TOKEN").unwrap(), Some("xoxb-123".to_string()));
    }

    #[test]
    fn test_set_rewrites_existing_key() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        env.set("SLACK_TOKEN", "old").unwrap();
        env.set("SLACK_CHANNEL_ID", "C01").unwrap();
        env.set("SLACK_TOKEN", "new").unwrap();

        assert_eq!(env.get("SLACK_TOKEN").unwrap(), Some("new".to_string()));
        assert_eq!(env.get("SLACK_CHANNEL_ID").unwrap(), Some("C01".to_string()));

        // The rewrite must not duplicate the key.
        let contents = std::fs::read_to_string(temp.path().join("env")).unwrap();
        assert_eq!(contents.matches("SLACK_TOKEN=").count(), 1);
    }

    #[test]
    fn test_set_preserves_comments_and_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env");
        std::fs::write(&path, "# slack settings\nSLACK_TOKEN=abc\n").unwrap();

        let env = EnvFile::new(&path);
        env.set("SLACK_TOKEN", "def").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "# slack settings\nSLACK_TOKEN=def\n");
    }

    #[test]
    fn test_value_may_contain_equals() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        env.set("SLACK_API_BASE", "https://example.com?a=b").unwrap();

        assert_eq!(
            env.get("SLACK_API_BASE").unwrap(),
            Some("https://example.com?a=b".to_string())
        );
    }

    #[test]
    fn test_similar_prefix_is_not_a_match() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        env.set("SLACK_NAME", "taro").unwrap();

        assert_eq!(env.get("SLACK_NAM").unwrap(), None);
    }
}
