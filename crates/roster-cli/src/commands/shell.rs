//! The `roster shell` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::{load_config_from, OutputFormat};
use crate::notify::TimedNotifier;
use crate::session::{Session, Step, HELP};

pub async fn execute(format: Option<OutputFormat>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.default_format);

    let notifier = TimedNotifier::new(config.dismiss_after());
    let mut session = Session::new(notifier);
    tracing::debug!(
        "shell started (format: {format}, dismiss after {}ms)",
        config.dismiss_after_ms
    );

    println!("{}", session.render(format)?);
    eprintln!("Type 'help' for commands, 'quit' to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("roster> ");
        std::io::stderr().flush().ok();

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };

        match session.handle_line(&line) {
            Step::Quit => break,
            Step::Help => println!("{HELP}"),
            Step::Continue { render: true } => println!("{}", session.render(format)?),
            Step::Continue { render: false } => {}
        }
    }

    tracing::debug!(
        rejected = session.rejected(),
        count = session.engine().count(),
        "shell finished"
    );
    Ok(())
}
