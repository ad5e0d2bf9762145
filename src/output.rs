//! Output helpers shared by the command implementations.

use serde::Serialize;

use crate::error::OhayoError;

/// Serialize a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `OhayoError::Parse` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, OhayoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_pretty_prints() {
        let value = serde_json::json!({ "state": "running" });
        let out = to_json(&value).unwrap();
        assert!(out.contains("\"state\": \"running\""));
    }
}
