//! Session state owned by one terminal simulator

use crate::input::command_log::CommandLog;
use crate::model::history::{EntryKind, Transcript};

/// Where the simulator is in its startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootPhase {
    #[default]
    NotStarted,
    Booting,
    Ready,
}

/// Everything the simulator mutates in response to timers and input.
///
/// Discarded on teardown; nothing here is persisted.
#[derive(Debug)]
pub struct SessionState {
    pub boot_phase: BootPhase,
    pub transcript: Transcript,
    pub input: String,
    pub command_log: CommandLog,
}

impl SessionState {
    /// Fresh state with `initial_lines` pre-loaded as plain system entries.
    pub fn new(initial_lines: &[String], history_limit: usize) -> Self {
        let mut transcript = Transcript::new();
        for line in initial_lines {
            transcript.push(EntryKind::System, line.as_str(), false);
        }
        Self {
            boot_phase: BootPhase::NotStarted,
            transcript,
            input: String::new(),
            command_log: CommandLog::with_capacity(history_limit),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.boot_phase == BootPhase::Ready
    }
}
