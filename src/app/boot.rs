//! Scripted boot sequence
//!
//! The script is flattened into a list of steps consumed by an index
//! cursor. Each step carries the delay to wait before it and the entry it
//! appends. The owner schedules one step at a time and calls `advance` when
//! its timer fires.

use crate::config::BootConfig;
use crate::model::history::EntryKind;
use std::time::Duration;

/// One transcript entry produced by the boot script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootStep {
    pub delay: Duration,
    pub kind: EntryKind,
    pub content: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct BootSequencer {
    steps: Vec<BootStep>,
    lead_in: Duration,
    /// Index of the next step to emit
    cursor: usize,
    system_steps: usize,
}

impl BootSequencer {
    /// Build the step list from the boot config.
    ///
    /// Only the last system message and the first welcome line are
    /// highlighted.
    pub fn new(config: &BootConfig) -> Self {
        let last_system = config.messages.len().checked_sub(1);
        let system = config.messages.iter().enumerate().map(|(i, m)| BootStep {
            delay: m.delay(),
            kind: EntryKind::System,
            content: m.message.clone(),
            highlighted: Some(i) == last_system,
        });
        let welcome = config.welcome.iter().enumerate().map(|(i, m)| BootStep {
            delay: m.delay(),
            kind: EntryKind::Welcome,
            content: m.message.clone(),
            highlighted: i == 0,
        });

        Self {
            steps: system.chain(welcome).collect(),
            lead_in: config.lead_in(),
            cursor: 0,
            system_steps: config.messages.len(),
        }
    }

    /// Delay to wait before the next step, or `None` once the script is done.
    pub fn next_delay(&self) -> Option<Duration> {
        let step = self.steps.get(self.cursor)?;
        if self.cursor == 0 {
            Some(self.lead_in + step.delay)
        } else {
            Some(step.delay)
        }
    }

    /// Take the next step and move the cursor past it.
    pub fn advance(&mut self) -> Option<&BootStep> {
        let step = self.steps.get(self.cursor)?;
        self.cursor += 1;
        Some(step)
    }

    /// Drop the remaining steps.
    pub fn cancel(&mut self) {
        self.cursor = self.steps.len();
    }

    /// Fraction of system messages reached, for the progress bar.
    ///
    /// The message currently being waited on counts as reached.
    pub fn progress(&self) -> f64 {
        if self.system_steps == 0 {
            return 1.0;
        }
        let reached = (self.cursor + 1).min(self.system_steps);
        reached as f64 / self.system_steps as f64
    }

    pub fn steps(&self) -> &[BootStep] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BootMessage;

    fn config() -> BootConfig {
        BootConfig {
            lead_in_ms: 300,
            messages: vec![
                BootMessage::new("a", 600),
                BootMessage::new("b", 800),
                BootMessage::new("c", 500),
            ],
            welcome: vec![
                BootMessage::new("w1", 500),
                BootMessage::new("w2", 300),
                BootMessage::new("w3", 200),
            ],
        }
    }

    #[test]
    fn highlights_last_system_and_first_welcome() {
        let boot = BootSequencer::new(&config());
        let flags: Vec<_> = boot
            .steps()
            .iter()
            .map(|s| (s.kind, s.content.as_str(), s.highlighted))
            .collect();
        assert_eq!(
            flags,
            vec![
                (EntryKind::System, "a", false),
                (EntryKind::System, "b", false),
                (EntryKind::System, "c", true),
                (EntryKind::Welcome, "w1", true),
                (EntryKind::Welcome, "w2", false),
                (EntryKind::Welcome, "w3", false),
            ]
        );
    }

    #[test]
    fn lead_in_applies_to_first_step_only() {
        let mut boot = BootSequencer::new(&config());
        assert_eq!(boot.next_delay(), Some(Duration::from_millis(900)));
        boot.advance();
        assert_eq!(boot.next_delay(), Some(Duration::from_millis(800)));
    }

    #[test]
    fn advance_walks_to_the_end() {
        let mut boot = BootSequencer::new(&config());
        let mut seen = Vec::new();
        while let Some(step) = boot.advance() {
            seen.push(step.content.clone());
        }
        assert_eq!(seen, ["a", "b", "c", "w1", "w2", "w3"]);
        assert_eq!(boot.next_delay(), None);
        assert_eq!(boot.next_delay(), None);
    }

    #[test]
    fn progress_counts_system_messages() {
        let mut boot = BootSequencer::new(&config());
        assert!((boot.progress() - 1.0 / 3.0).abs() < 1e-9);
        boot.advance();
        boot.advance();
        assert!((boot.progress() - 1.0).abs() < 1e-9);
        boot.advance();
        boot.advance();
        assert!((boot.progress() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cancel_skips_remaining_steps() {
        let mut boot = BootSequencer::new(&config());
        boot.advance();
        boot.cancel();
        assert_eq!(boot.next_delay(), None);
        assert!(boot.advance().is_none());
    }

    #[test]
    fn empty_script_has_no_highlighted_system_entry() {
        let boot = BootSequencer::new(&BootConfig {
            lead_in_ms: 0,
            messages: vec![],
            welcome: vec![BootMessage::new("hi", 0)],
        });
        assert_eq!(boot.steps().len(), 1);
        assert_eq!(boot.steps()[0].kind, EntryKind::Welcome);
        assert_eq!(boot.progress(), 1.0);
    }
}
