//! The `roster exec` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use roster_core::Command;

use crate::config::{load_config_from, OutputFormat};
use crate::notify::TimedNotifier;
use crate::session::Session;

pub fn execute(
    commands: Vec<String>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    strict: bool,
    quiet: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.default_format);

    let mut notifier = TimedNotifier::new(config.dismiss_after());
    if quiet {
        notifier = notifier.quiet();
    }
    let mut session = Session::new(notifier);

    for line in &commands {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                session.reject_input(&e);
                if strict {
                    anyhow::bail!("'{line}': {e}");
                }
                continue;
            }
        };

        if let Err(e) = session.apply(&command) {
            if strict {
                anyhow::bail!("'{line}': {}", command.failure_message(&e));
            }
        }
    }

    match output {
        Some(path) => {
            session
                .write(format, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Roster written to: {}", path.display());
        }
        None => println!("{}", session.render(format)?),
    }

    if session.rejected() > 0 {
        tracing::debug!("{} of {} command(s) rejected", session.rejected(), commands.len());
    }

    Ok(())
}
