//! Input line and command recall
//!
//! All handlers are no-ops until the session is ready: input that arrives
//! during boot is dropped, not buffered.

use crate::input::command_log::RecallNext;
use crate::model::history::EntryKind;
use crate::model::session::SessionState;

/// Replace the input line with `text`. Returns false if ignored.
pub fn on_keystroke(session: &mut SessionState, text: &str) -> bool {
    if !session.is_ready() {
        return false;
    }
    session.input.clear();
    session.input.push_str(text);
    true
}

/// Submit the current input line.
///
/// Echoes the raw line after `prompt`, records the trimmed command for
/// recall and clears the line. Returns the trimmed command for dispatch, or
/// `None` when not ready or when the line is blank.
pub fn on_submit(session: &mut SessionState, prompt: &str) -> Option<String> {
    if !session.is_ready() {
        return None;
    }
    let command = session.input.trim();
    if command.is_empty() {
        return None;
    }
    let command = command.to_string();

    let raw = std::mem::take(&mut session.input);
    session
        .transcript
        .push(EntryKind::Input, format!("{prompt} {raw}"), false);
    session.command_log.record(&command);
    tracing::debug!(command = %command, "Submitted command");

    Some(command)
}

/// Replace the input line with the next older command, if any.
pub fn on_recall_previous(session: &mut SessionState) -> bool {
    if !session.is_ready() {
        return false;
    }
    match session.command_log.recall_previous() {
        Some(command) => {
            session.input = command.to_string();
            true
        }
        None => false,
    }
}

/// Replace the input line with the next newer command, clearing it once
/// the newest command has been passed.
pub fn on_recall_next(session: &mut SessionState) -> bool {
    if !session.is_ready() {
        return false;
    }
    match session.command_log.recall_next() {
        RecallNext::Command(command) => {
            session.input = command.to_string();
            true
        }
        RecallNext::Exhausted => {
            session.input.clear();
            true
        }
        RecallNext::Unchanged => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session::BootPhase;

    fn ready_session() -> SessionState {
        let mut session = SessionState::new(&[], 50);
        session.boot_phase = BootPhase::Ready;
        session
    }

    #[test]
    fn keystrokes_ignored_while_booting() {
        let mut session = SessionState::new(&[], 50);
        session.boot_phase = BootPhase::Booting;
        assert!(!on_keystroke(&mut session, "hel"));
        assert!(session.input.is_empty());
        assert_eq!(on_submit(&mut session, "$"), None);
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn submit_echoes_raw_and_returns_trimmed() {
        let mut session = ready_session();
        on_keystroke(&mut session, "  help ");

        assert_eq!(on_submit(&mut session, "$"), Some("help".to_string()));
        let echo = session.transcript.last().unwrap();
        assert_eq!(echo.kind(), EntryKind::Input);
        assert_eq!(echo.content(), "$   help ");
        assert!(!echo.highlighted());
        assert_eq!(session.command_log.commands(), &["help".to_string()]);
        assert!(session.input.is_empty());
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut session = ready_session();
        on_keystroke(&mut session, "   ");
        assert_eq!(on_submit(&mut session, "$"), None);
        assert!(session.transcript.is_empty());
        assert!(session.command_log.is_empty());
        // The blank line stays where it was.
        assert_eq!(session.input, "   ");
    }

    #[test]
    fn recall_round_trip_restores_empty_line() {
        let mut session = ready_session();
        for cmd in ["help", "version"] {
            on_keystroke(&mut session, cmd);
            on_submit(&mut session, "$");
        }

        assert!(on_recall_previous(&mut session));
        assert_eq!(session.input, "version");
        assert!(on_recall_previous(&mut session));
        assert_eq!(session.input, "help");
        assert!(!on_recall_previous(&mut session));
        assert_eq!(session.input, "help");

        assert!(on_recall_next(&mut session));
        assert_eq!(session.input, "version");
        assert!(on_recall_next(&mut session));
        assert_eq!(session.input, "");
        assert!(!on_recall_next(&mut session));
    }
}
