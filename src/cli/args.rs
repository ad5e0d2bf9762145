use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "ohayo")]
#[command(about = "A work-time tracking CLI that posts session summaries to Slack")]
#[command(long_about = "ohayo - track your work day from the terminal

Records one work session at a time: start in the morning, pause for
lunch, resume, and end when you are done. Ending a session posts a
summary (total worked time, paused time, start/end clock times, and an
optional memo) to a Slack channel.

QUICK START:
  ohayo set-token xoxb-...     Store your Slack bot token
  ohayo set-channel-id C0123   Store the target channel
  ohayo start                  Begin the day
  ohayo end \"daily report\"     Finish and notify Slack

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a new work session
    ///
    /// Creates a fresh session record. If an unfinished session already
    /// exists this prints a notice and leaves it untouched; if the previous
    /// session has ended, it is archived under its start date first.
    ///
    /// # Examples
    ///
    ///   ohayo start
    Start,

    /// Pause the running session
    ///
    /// Records the pause time. Paused time is subtracted from the total
    /// worked time in the end-of-session summary.
    ///
    /// # Examples
    ///
    ///   ohayo pause
    Pause,

    /// Resume a paused session
    ///
    /// Closes the open pause interval and puts the session back into the
    /// running state.
    ///
    /// # Examples
    ///
    ///   ohayo resume
    Resume,

    /// End the session and post the summary to Slack
    ///
    /// Finalizes the record (closing an open pause if necessary), persists
    /// it, and posts the summary to the configured channel. The session is
    /// saved even if the notification fails.
    ///
    /// # Examples
    ///
    ///   ohayo end
    ///   ohayo end "daily report"
    End {
        /// Optional free-text memo included in the notification
        memo: Option<String>,
    },

    /// Show the current session's state and elapsed times
    ///
    /// Displays the state (running, paused, or ended), the start time, the
    /// worked time so far, and the total paused time.
    ///
    /// # Examples
    ///
    ///   ohayo status
    ///   ohayo status -o json
    Status,

    /// Store the Slack bot token in the config file
    ///
    /// Upserts SLACK_TOKEN in ~/.ohayo/env. The token is sent as a bearer
    /// token with every chat.postMessage call.
    #[command(name = "set-token")]
    SetToken {
        /// Slack bot token (xoxb-...)
        value: String,
    },

    /// Store the target Slack channel id in the config file
    ///
    /// Upserts SLACK_CHANNEL_ID in ~/.ohayo/env.
    #[command(name = "set-channel-id")]
    SetChannelId {
        /// Channel id (e.g. C0123456789)
        value: String,
    },

    /// Store the display name used in the summary header
    ///
    /// Upserts SLACK_NAME in ~/.ohayo/env. Optional; when unset the
    /// summary starts with the date line.
    #[command(name = "set-name")]
    SetName {
        /// Display name shown at the top of the summary
        value: String,
    },

    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell.
    ///
    /// # Examples
    ///
    ///   ohayo completions bash > ~/.bash_completion.d/ohayo
    ///   ohayo completions zsh > ~/.zfunc/_ohayo
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}
