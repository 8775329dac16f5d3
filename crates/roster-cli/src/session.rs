//! One interactive roster session: an engine, a notification sink, and the
//! current highlight.
//!
//! Input lines come in, commands go to the engine, and every result is
//! reported to the sink. Rendering is left to the caller, which asks for a
//! frame whenever [`Step::Continue`] says the roster should be redrawn.

use std::path::Path;

use anyhow::Result;

use roster_core::{
    execute, Command, CommandError, Notification, NotificationSink, Outcome, RosterEngine,
    RosterError,
};
use roster_report::{html, json, text, write_output, RosterView};

use crate::config::OutputFormat;

pub const HELP: &str = "\
Commands:
  list | show              show the roster
  count                    number of students
  highest | max            highlight the top scorer
  average | avg            class average
  sort                     sort by marks, highest first
  reset                    restore the sample data
  remove-last | pop        remove the last student
  add <name> <marks>       add a student (marks 0-100)
  dismiss                  clear the current message
  help                     this text
  quit | exit              leave the session";

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue { render: bool },
    Help,
    Quit,
}

pub struct Session<S> {
    engine: RosterEngine,
    sink: S,
    highlight: Option<usize>,
    rejected: usize,
}

impl<S: NotificationSink> Session<S> {
    /// A session over a fresh sample roster.
    pub fn new(sink: S) -> Self {
        Self::with_engine(RosterEngine::new(), sink)
    }

    pub fn with_engine(engine: RosterEngine, sink: S) -> Self {
        Self {
            engine,
            sink,
            highlight: None,
            rejected: 0,
        }
    }

    pub fn engine(&self) -> &RosterEngine {
        &self.engine
    }

    /// Number of commands rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Run one command and report its result to the sink.
    pub fn apply(&mut self, command: &Command) -> Result<Outcome, RosterError> {
        let result = execute(&mut self.engine, command);
        self.highlight = result.as_ref().ok().and_then(Outcome::highlight);
        if let Err(e) = &result {
            self.rejected += 1;
            if e.is_input_error() {
                tracing::debug!(command = %command, kind = e.kind(), "input rejected");
            } else {
                tracing::debug!(command = %command, count = self.engine.count(), "nothing to act on");
            }
        }
        self.sink.notify(Notification::for_result(command, &result));
        result
    }

    /// Report a line that could not be parsed.
    pub fn reject_input(&mut self, error: &CommandError) {
        self.rejected += 1;
        let message = match error {
            CommandError::Empty => "Please enter a command!".to_string(),
            CommandError::Unknown(word) => {
                format!("Unknown command '{word}' (type 'help' for a list)")
            }
        };
        self.sink.notify(Notification::error(message));
    }

    /// Clear the current message and any highlight.
    pub fn dismiss(&mut self) {
        self.sink.dismiss();
        self.highlight = None;
    }

    /// Handle one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Step {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => return Step::Continue { render: false },
            "quit" | "exit" => return Step::Quit,
            "help" | "?" => return Step::Help,
            "dismiss" | "close" => {
                self.dismiss();
                return Step::Continue { render: true };
            }
            _ => {}
        }

        match line.parse::<Command>() {
            Ok(command) => {
                let render = match self.apply(&command) {
                    Ok(outcome) => {
                        outcome.changed_roster()
                            || outcome.highlight().is_some()
                            || matches!(outcome, Outcome::Listed { .. })
                    }
                    Err(_) => false,
                };
                Step::Continue { render }
            }
            Err(e) => {
                self.reject_input(&e);
                Step::Continue { render: false }
            }
        }
    }

    /// Render the current roster.
    ///
    /// Text output leaves the notification out, since the sink already shows
    /// it; HTML and JSON embed it.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let current = self.sink.current();
        let view = self.view();
        match format {
            OutputFormat::Text => Ok(text::render_table(&view)),
            OutputFormat::Html => Ok(html::generate_html(
                &view.with_notification(current.as_ref()),
            )),
            OutputFormat::Json => json::render_json(&view.with_notification(current.as_ref())),
        }
    }

    /// Render the current roster into a file, creating parent directories.
    pub fn write(&self, format: OutputFormat, path: &Path) -> Result<()> {
        match format {
            OutputFormat::Html => {
                let current = self.sink.current();
                html::write_html(&self.view().with_notification(current.as_ref()), path)
            }
            _ => write_output(path, &self.render(format)?),
        }
    }

    fn view(&self) -> RosterView<'_> {
        RosterView::new(self.engine.list()).with_highlight(self.highlight)
    }
}
