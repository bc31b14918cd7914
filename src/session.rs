// Interactive session: command parsing and the presentation loop

use crate::confirm::Confirm;
use crate::render::{Renderer, board_order};
use crate::store::TaskList;
use crate::task::{Task, TaskId};
use eyre::{Context, Result, eyre};
use std::io::{self, Write};
use tracing::{debug, info, warn};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

const HELP: &str = "\
Commands:
  add <text>       Add a task to the top of the list
  toggle <ref>     Mark a task complete or incomplete
  delete <ref>     Delete a task (asks for confirmation)
  list [--json]    Show the board, or the raw task list as JSON
  help             Show this help
  quit             Leave the session

<ref> is the number shown next to a task, or its full id.
";

/// One parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(String),
    Delete(String),
    List { json: bool },
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim_start();
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            // Text is passed through untrimmed; the store owns trimming.
            "add" => Command::Add(rest.trim_end_matches(['\r', '\n']).to_string()),
            "toggle" | "done" => Command::Toggle(Self::reference(verb, rest)?),
            "delete" | "rm" => Command::Delete(Self::reference(verb, rest)?),
            "list" | "ls" => match rest.trim() {
                "" => Command::List { json: false },
                "--json" => Command::List { json: true },
                other => return Err(eyre!("Unknown option for list: {}", other)),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(eyre!("Unknown command: {} (type 'help' for a list)", other)),
        };

        Ok(Some(command))
    }

    fn reference(verb: &str, rest: &str) -> Result<String> {
        let reference = rest.trim();
        if reference.is_empty() {
            return Err(eyre!("Usage: {} <number|id>", verb));
        }
        Ok(reference.to_string())
    }
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Owns the task list for one session and drives it from user commands
///
/// Every successful mutation is followed by a full rerender of the board.
pub struct Session<C, W> {
    list: TaskList,
    confirm: C,
    renderer: Renderer,
    out: W,
}

impl<C: Confirm, W: Write> Session<C, W> {
    pub fn new(renderer: Renderer, confirm: C, out: W) -> Self {
        Self {
            list: TaskList::new(),
            confirm,
            renderer,
            out,
        }
    }

    /// Current store snapshot
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Consume the session, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read and execute commands until `quit` or end of input
    ///
    /// A prompt is written before each read when given. Command errors are
    /// reported to the user and the loop continues.
    pub fn run<I>(&mut self, lines: I, prompt: Option<&str>) -> Result<()>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        info!("Session started");
        write!(self.out, "{}", self.renderer.banner())?;
        writeln!(self.out)?;
        self.render()?;

        let mut lines = lines.into_iter();
        loop {
            if let Some(prompt) = prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                if prompt.is_some() {
                    writeln!(self.out)?;
                }
                break;
            };
            let line = line.context("Failed to read command")?;

            if self.handle_line(&line)? == Outcome::Quit {
                break;
            }
        }

        let summary = self.list.summary();
        info!(
            tasks = summary.total(),
            pending = summary.pending,
            completed = summary.completed,
            "Session ended"
        );
        Ok(())
    }

    /// Parse and execute one line, reporting parse errors to the user
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Outcome::Continue),
            Err(e) => {
                debug!(error = %e, "Rejected command");
                writeln!(self.out, "{}", e)?;
                Ok(Outcome::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add(text) => {
                self.submit(&text)?;
            }
            Command::Toggle(reference) => {
                self.toggle(&reference)?;
            }
            Command::Delete(reference) => {
                self.delete(&reference)?;
            }
            Command::List { json: false } => self.render()?,
            Command::List { json: true } => {
                let json = serde_json::to_string_pretty(self.list.tasks()).context("Failed to serialize tasks")?;
                writeln!(self.out, "{}", json)?;
            }
            Command::Help => write!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    /// Add form submission
    ///
    /// Blank text is suppressed entirely: the store is left alone and nothing
    /// is rerendered.
    pub fn submit(&mut self, raw_text: &str) -> Result<Option<TaskId>> {
        if raw_text.trim().is_empty() {
            writeln!(self.out, "Nothing to add: task text is empty")?;
            return Ok(None);
        }

        let id = self.list.add(raw_text);
        if id.is_some() {
            self.render()?;
        }
        Ok(id)
    }

    /// Toggle control for the referenced task
    pub fn toggle(&mut self, reference: &str) -> Result<Option<bool>> {
        let Some(id) = self.resolve(reference) else {
            writeln!(self.out, "No task matches {}", reference)?;
            return Ok(None);
        };

        let completed = self.list.toggle(id);
        match completed {
            Some(_) => self.render()?,
            None => writeln!(self.out, "No task matches {}", reference)?,
        }
        Ok(completed)
    }

    /// Delete control for the referenced task
    ///
    /// The store is only called after the confirmation capability answers
    /// yes. A decline leaves the list untouched.
    pub fn delete(&mut self, reference: &str) -> Result<Option<Task>> {
        let Some(id) = self.resolve(reference).filter(|id| self.list.get(*id).is_some()) else {
            writeln!(self.out, "No task matches {}", reference)?;
            return Ok(None);
        };

        if !self.confirm.confirm(DELETE_PROMPT)? {
            debug!(%id, "Delete declined");
            writeln!(self.out, "Delete cancelled")?;
            return Ok(None);
        }

        let removed = self.list.delete(id);
        if removed.is_some() {
            self.render()?;
        } else {
            warn!(%id, "Task vanished before delete");
        }
        Ok(removed)
    }

    /// Map a user reference to a task id
    ///
    /// Numbers are board positions (1-based); anything else must parse as a
    /// full id.
    fn resolve(&self, reference: &str) -> Option<TaskId> {
        let reference = reference.trim();
        if let Ok(position) = reference.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|idx| board_order(&self.list).get(idx).map(|t| t.id()));
        }
        reference.parse::<TaskId>().ok()
    }

    fn render(&mut self) -> Result<()> {
        write!(self.out, "{}", self.renderer.board(&self.list))?;
        self.out.flush()?;
        Ok(())
    }
}
