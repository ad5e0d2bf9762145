//! Minimal Slack web API client.
//!
//! One blocking `chat.postMessage` call per session end. No retry: a failed
//! post is reported to the user and the already-saved record is left alone.

use serde::Deserialize;
use serde_json::json;

use crate::error::OhayoError;

const DEFAULT_API_BASE: &str = "https://slack.com/api";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A message accepted by Slack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    /// Channel the message was delivered to.
    pub channel: String,
    /// Message timestamp assigned by Slack.
    pub ts: String,
}

#[derive(Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    ts: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Blocking client for the Slack web API.
pub struct SlackClient {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl SlackClient {
    /// Create a client for the public Slack API.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(token: &str) -> Result<Self, OhayoError> {
        Self::with_base_url(DEFAULT_API_BASE, token)
    }

    /// Create a client against an alternate API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, OhayoError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ohayo/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Post a text message to a channel via `chat.postMessage`.
    ///
    /// # Errors
    ///
    /// Returns [`OhayoError::Http`] if the request fails and
    /// [`OhayoError::Notify`] if Slack rejects it.
    pub fn post_message(&self, channel: &str, text: &str) -> Result<PostedMessage, OhayoError> {
        let response: PostMessageResponse = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(&json!({ "channel": channel, "text": text }))
            .send()?
            .json()?;

        if !response.ok {
            return Err(OhayoError::Notify(
                response.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(PostedMessage {
            channel: response.channel.unwrap_or_else(|| channel.to_string()),
            ts: response.ts.unwrap_or_default(),
        })
    }
}
