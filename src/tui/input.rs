//! Key bindings for the drill.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_numeri::{Feedback, Phase};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the answer.
    Type(char),
    /// Delete the last character of the answer.
    Backspace,
    /// Check the answer.
    Submit,
    /// Go to the next challenge.
    Continue,
    /// Speak the challenge again.
    Replay,
    /// Start a new session.
    Restart,
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key press to an action given the current feedback and phase.
pub fn action_for(key: KeyEvent, feedback: Feedback, phase: Phase) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('r') => Action::Replay,
            _ => Action::Ignore,
        };
    }

    match (phase, feedback, key.code) {
        (_, _, KeyCode::Esc) => Action::Quit,

        (Phase::GameOver, _, KeyCode::Enter | KeyCode::Char('r')) => Action::Restart,
        (Phase::GameOver, _, KeyCode::Char('q')) => Action::Quit,
        (Phase::GameOver, _, _) => Action::Ignore,

        (_, _, KeyCode::Tab) => Action::Replay,

        (_, Feedback::Idle, KeyCode::Enter) => Action::Submit,
        (_, Feedback::Idle, KeyCode::Backspace) => Action::Backspace,
        (_, Feedback::Idle, KeyCode::Char(c)) => Action::Type(c),

        (_, _, KeyCode::Enter | KeyCode::Char(' ')) => Action::Continue,
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_depends_on_feedback() {
        assert_eq!(
            action_for(key(KeyCode::Enter), Feedback::Idle, Phase::Playing),
            Action::Submit
        );
        assert_eq!(
            action_for(key(KeyCode::Enter), Feedback::Correct, Phase::Playing),
            Action::Continue
        );
        assert_eq!(
            action_for(key(KeyCode::Enter), Feedback::Incorrect, Phase::GameOver),
            Action::Restart
        );
    }

    #[test]
    fn letters_type_only_while_idle() {
        assert_eq!(
            action_for(key(KeyCode::Char('q')), Feedback::Idle, Phase::Playing),
            Action::Type('q')
        );
        assert_eq!(
            action_for(key(KeyCode::Char('q')), Feedback::Correct, Phase::Playing),
            Action::Ignore
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c, Feedback::Idle, Phase::Playing), Action::Quit);
    }
}
