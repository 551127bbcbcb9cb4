//! Terminal transcript (scrollback)
//!
//! The transcript is append-only apart from `clear`, which drops every entry
//! at once. Entry ids come from a counter owned by the transcript and are
//! never reset, so ids stay unique for the whole session even across clears.

/// What produced a transcript entry. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Echo of a submitted command
    Input,
    /// Output of a built-in command
    Output,
    /// Unrecognized command report
    Error,
    /// Boot log and initial lines
    System,
    /// Welcome block printed at the end of boot
    Welcome,
}

/// Unique, session-wide entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u64);

/// A single immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    id: EntryId,
    kind: EntryKind,
    content: String,
    highlighted: bool,
}

impl HistoryEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Raw content, possibly spanning several lines.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Content split for display.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, assigning it the next id.
    pub fn push(
        &mut self,
        kind: EntryKind,
        content: impl Into<String>,
        highlighted: bool,
    ) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(HistoryEntry {
            id,
            kind,
            content: content.into(),
            highlighted,
        });
        id
    }

    /// Drop every entry. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of display lines across all entries.
    pub fn line_count(&self) -> usize {
        self.entries.iter().map(|e| e.lines().count()).sum()
    }
}
