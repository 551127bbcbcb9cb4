//! Translate crossterm key events into terminal prompt input
//!
//! The prompt only understands whole-line replacement, so editing keys are
//! turned into the line that should result from them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An input action for the terminal prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// The input line should become this text
    Keystroke(String),
    Submit,
    RecallPrevious,
    RecallNext,
}

/// Map a key press to a prompt action given the current input line.
///
/// Returns `None` for keys the prompt does not handle.
pub fn translate_key(event: &KeyEvent, current: &str) -> Option<PromptInput> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match (event.code, event.modifiers) {
        (KeyCode::Enter, _) => Some(PromptInput::Submit),
        (KeyCode::Up, KeyModifiers::NONE) => Some(PromptInput::RecallPrevious),
        (KeyCode::Down, KeyModifiers::NONE) => Some(PromptInput::RecallNext),
        (KeyCode::Backspace, _) => {
            let mut text = current.to_string();
            text.pop();
            Some(PromptInput::Keystroke(text))
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(PromptInput::Keystroke(String::new())),
        (KeyCode::Char(c), modifiers)
            if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT =>
        {
            let mut text = current.to_string();
            text.push(c);
            Some(PromptInput::Keystroke(text))
        }
        _ => None,
    }
}

/// Map pasted text to a prompt action. Only the first line is kept.
pub fn translate_paste(pasted: &str, current: &str) -> Option<PromptInput> {
    let first_line = pasted.lines().next().unwrap_or("");
    if first_line.is_empty() {
        return None;
    }
    Some(PromptInput::Keystroke(format!("{current}{first_line}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_appends() {
        let ev = key(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(
            translate_key(&ev, "hel"),
            Some(PromptInput::Keystroke("help".to_string()))
        );

        let ev = key(KeyCode::Char('H'), KeyModifiers::SHIFT);
        assert_eq!(
            translate_key(&ev, ""),
            Some(PromptInput::Keystroke("H".to_string()))
        );
    }

    #[test]
    fn backspace_removes_last_char() {
        let ev = key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(
            translate_key(&ev, "gotó"),
            Some(PromptInput::Keystroke("got".to_string()))
        );
        assert_eq!(
            translate_key(&ev, ""),
            Some(PromptInput::Keystroke(String::new()))
        );
    }

    #[test]
    fn control_keys() {
        assert_eq!(
            translate_key(&key(KeyCode::Enter, KeyModifiers::NONE), "x"),
            Some(PromptInput::Submit)
        );
        assert_eq!(
            translate_key(&key(KeyCode::Up, KeyModifiers::NONE), ""),
            Some(PromptInput::RecallPrevious)
        );
        assert_eq!(
            translate_key(&key(KeyCode::Down, KeyModifiers::NONE), ""),
            Some(PromptInput::RecallNext)
        );
        assert_eq!(
            translate_key(&key(KeyCode::Char('u'), KeyModifiers::CONTROL), "goto lab"),
            Some(PromptInput::Keystroke(String::new()))
        );
        assert_eq!(
            translate_key(&key(KeyCode::Char('x'), KeyModifiers::ALT), ""),
            None
        );
        assert_eq!(translate_key(&key(KeyCode::Esc, KeyModifiers::NONE), ""), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut ev = key(KeyCode::Char('a'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(translate_key(&ev, ""), None);
    }

    #[test]
    fn paste_keeps_first_line() {
        assert_eq!(
            translate_paste("goto lab\nexit", "$"),
            Some(PromptInput::Keystroke("$goto lab".to_string()))
        );
        assert_eq!(translate_paste("\nfoo", ""), None);
    }
}
