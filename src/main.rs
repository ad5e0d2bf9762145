use clap::Parser;
use colored::Colorize;

use ohayo::cli::args::{Cli, Commands};
use ohayo::cli::commands;
use ohayo::config::{Config, Paths};
use ohayo::error::OhayoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), OhayoError> {
    let cli = Cli::parse();
    let format = cli.output;

    let paths = Paths::new()?;
    paths.ensure_dirs()?;

    let output = match cli.command {
        Commands::SetToken { value } => commands::set_token(&paths, &value)?,
        Commands::SetChannelId { value } => commands::set_channel_id(&paths, &value)?,
        Commands::SetName { value } => commands::set_name(&paths, &value)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
        // Session commands require a complete configuration before any
        // state mutation happens.
        Commands::Start => {
            Config::load(&paths)?;
            commands::start(&paths, format)?
        }
        Commands::Pause => {
            Config::load(&paths)?;
            commands::pause(&paths, format)?
        }
        Commands::Resume => {
            Config::load(&paths)?;
            commands::resume(&paths, format)?
        }
        Commands::End { memo } => {
            let config = Config::load(&paths)?;
            commands::end(&paths, &config, memo.as_deref(), format)?
        }
        Commands::Status => commands::status(&paths, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
