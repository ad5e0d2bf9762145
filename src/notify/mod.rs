//! End-of-session Slack notification.
//!
//! Builds the summary message and delivers it with a single blocking
//! `chat.postMessage` call.

pub mod message;
pub mod slack;

pub use message::build_summary;
pub use slack::{PostedMessage, SlackClient};
