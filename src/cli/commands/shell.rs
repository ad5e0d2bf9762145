//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::OhayoError;

/// Generate a completion script for the named shell.
///
/// # Errors
///
/// Returns an error if the shell is not recognized.
pub fn completions(shell: &str) -> Result<String, OhayoError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        OhayoError::Config(format!(
            "Unsupported shell '{shell}'. Use bash, zsh, fish, powershell, or elvish."
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "ohayo", &mut buf);
    String::from_utf8(buf).map_err(|e| OhayoError::Config(format!("UTF-8 error: {e}")))
}

fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
