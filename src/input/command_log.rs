/// Submitted-command log with shell-style up/down recall
///
/// Commands are stored most recent first. The log is capped; once it is
/// full the oldest command is silently dropped. A recall cursor walks the
/// log: `None` means "not recalling", otherwise it is always a valid index.
#[derive(Debug)]
pub struct CommandLog {
    /// Most recent first
    commands: Vec<String>,

    /// Index into `commands`, or `None` when not recalling
    cursor: Option<usize>,

    max_entries: usize,
}

impl CommandLog {
    /// Default number of commands kept for recall
    pub const DEFAULT_MAX_ENTRIES: usize = 50;

    /// Create a log holding at most `max_entries` commands (at least one).
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            commands: Vec::new(),
            cursor: None,
            max_entries: max_entries.max(1),
        }
    }

    /// Record a submitted command and stop recalling.
    pub fn record(&mut self, command: &str) {
        self.commands.insert(0, command.to_string());
        self.commands.truncate(self.max_entries);
        self.cursor = None;
    }

    /// Step back to an older command.
    ///
    /// Returns the recalled command, or `None` if the log is empty or the
    /// cursor already points at the oldest entry.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let next = match self.cursor {
            None if !self.commands.is_empty() => 0,
            Some(i) if i + 1 < self.commands.len() => i + 1,
            _ => return None,
        };
        self.cursor = Some(next);
        Some(&self.commands[next])
    }

    /// Step forward to a newer command.
    pub fn recall_next(&mut self) -> RecallNext<'_> {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                RecallNext::Exhausted
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                RecallNext::Command(&self.commands[i - 1])
            }
            None => RecallNext::Unchanged,
        }
    }

    /// Recall index as a signed integer with -1 for "not recalling".
    pub fn cursor_index(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    /// Commands, most recent first.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Result of stepping forward through the log.
#[derive(Debug, PartialEq, Eq)]
pub enum RecallNext<'a> {
    /// Moved to a newer command
    Command(&'a str),
    /// Moved past the newest command; the input line should be cleared
    Exhausted,
    /// Not recalling; nothing changed
    Unchanged,
}
