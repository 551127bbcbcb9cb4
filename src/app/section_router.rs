//! Routes forwarded terminal commands to page sections

use crate::model::section::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Navigated(Section),
    /// `goto` with a target that is not a known section
    InvalidSection(String),
    CloseTerminal,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct SectionRouter {
    active: Section,
}

impl SectionRouter {
    pub fn new(start: Section) -> Self {
        Self { active: start }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn select(&mut self, section: Section) {
        if self.active != section {
            tracing::debug!(from = %self.active, to = %section, "Section changed");
            self.active = section;
        }
    }

    /// Handle a command forwarded by the terminal.
    ///
    /// The command is lowercased and trimmed; the target is the second
    /// space-separated word, so `goto  about` (two spaces) has an empty
    /// target.
    pub fn handle_command(&mut self, command: &str) -> RouteOutcome {
        let command = command.trim().to_lowercase();

        if command.starts_with("goto ") {
            let target = command.split(' ').nth(1).unwrap_or_default();
            return match Section::from_id(target) {
                Some(section) => {
                    self.select(section);
                    RouteOutcome::Navigated(section)
                }
                None => {
                    tracing::warn!(target, "Section not found");
                    RouteOutcome::InvalidSection(target.to_string())
                }
            };
        }

        if command == "exit" {
            return RouteOutcome::CloseTerminal;
        }

        RouteOutcome::Ignored
    }
}
