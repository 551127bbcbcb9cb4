//! Built-in terminal commands and their dispatch
//!
//! Commands are matched ASCII-case-insensitively on the trimmed line.
//! `goto <section>` and `exit` are not handled here: they are forwarded,
//! verbatim, to the navigator supplied by the host.

use crate::model::history::EntryKind;
use crate::model::session::SessionState;
use crate::services::time_source::TimeSource;

/// Receives `goto <section>` and `exit` commands.
///
/// Called synchronously, exactly once per forwarded command. Validation of
/// the target section is the navigator's job.
pub trait Navigator {
    fn on_command_execute(&mut self, command: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn on_command_execute(&mut self, command: &str) {
        self(command)
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Version,
    Whoami,
    /// `goto <section>`; `raw` is the whole command as typed
    Goto { raw: String, section: String },
    /// `exit`; `raw` keeps the typed casing
    Exit { raw: String },
    Unrecognized(String),
    Empty,
}

const GOTO_PREFIX: &str = "goto ";

impl Command {
    /// Parse an already trimmed command line.
    pub fn parse(line: &str) -> Self {
        if line.is_empty() {
            return Command::Empty;
        }
        if line.eq_ignore_ascii_case("help") {
            return Command::Help;
        }
        if line.eq_ignore_ascii_case("clear") {
            return Command::Clear;
        }
        if line.eq_ignore_ascii_case("version") {
            return Command::Version;
        }
        if line.eq_ignore_ascii_case("whoami") {
            return Command::Whoami;
        }
        if line.eq_ignore_ascii_case("exit") {
            return Command::Exit {
                raw: line.to_string(),
            };
        }
        match line.get(..GOTO_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(GOTO_PREFIX) => Command::Goto {
                raw: line.to_string(),
                section: line[GOTO_PREFIX.len()..].trim().to_string(),
            },
            _ => Command::Unrecognized(line.to_string()),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Version => "version",
            Command::Whoami => "whoami",
            Command::Goto { .. } => "goto",
            Command::Exit { .. } => "exit",
            Command::Unrecognized(_) => "unrecognized",
            Command::Empty => "empty",
        }
    }
}

pub const HELP_TEXT: &str = "\
┌─── AVAILABLE COMMANDS ─────────────────────┐
│                                            │
│  help ............ Show this help          │
│  clear ........... Clear the terminal      │
│  exit ............ Close the terminal      │
│  goto [section] .. Go to a section         │
│  version ......... System version          │
│  whoami .......... User information        │
│                                            │
└────────────────────────────────────────────┘";

pub const VERSION_TEXT: &str = "\
┌─── SYSTEM INFORMATION ───────┐
│                              │
│  Portfolio System v2.0.25    │
│  Build: 2025.04.16           │
│  Gefferson T. Souza          │
│  Full Stack Developer        │
│                              │
└──────────────────────────────┘";

/// Session block for `whoami`, stamped with `HH:MM` and `DD/MM/YYYY`.
pub fn whoami_text(clock: &dyn TimeSource) -> String {
    let now = clock.local_now();
    let time = now.format("%H:%M");
    let date = now.format("%d/%m/%Y");
    format!(
        "\
┌─── USER SESSION ───────────────────┐
│                                    │
│  User: visitor@portfolio-system    │
│  Role: Explorer                    │
│  Permissions: view_projects,       │
│    contact_owner, explore          │
│                                    │
│  Started: {time} - {date}       │
│                                    │
└────────────────────────────────────┘"
    )
}

pub fn unrecognized_text(command: &str) -> String {
    format!("Command not recognized: '{command}'. Type 'help' to see the available commands.")
}

/// Apply a parsed command to the session.
///
/// Never fails: anything unknown becomes an error entry in the transcript.
pub fn dispatch(
    command: &Command,
    session: &mut SessionState,
    navigator: &mut dyn Navigator,
    clock: &dyn TimeSource,
) {
    tracing::debug!(command = command.name(), "Dispatching command");
    match command {
        Command::Help => {
            session.transcript.push(EntryKind::Output, HELP_TEXT, true);
        }
        Command::Clear => session.transcript.clear(),
        Command::Version => {
            session.transcript.push(EntryKind::Output, VERSION_TEXT, true);
        }
        Command::Whoami => {
            session
                .transcript
                .push(EntryKind::Output, whoami_text(clock), true);
        }
        Command::Goto { raw, .. } | Command::Exit { raw } => {
            navigator.on_command_execute(raw);
        }
        Command::Unrecognized(text) => {
            session
                .transcript
                .push(EntryKind::Error, unrecognized_text(text), false);
        }
        Command::Empty => {}
    }
}
