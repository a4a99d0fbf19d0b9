//! Application state and logic.

use std::time::Instant;
use strictly_numeri::{ChallengeSource, GameSession, Speaker, SubmitOutcome};
use tracing::debug;

use super::input::Action;

/// Main application state.
pub struct App<C, S> {
    session: GameSession<C, S>,
    input: String,
    should_quit: bool,
}

impl<C: ChallengeSource, S: Speaker> App<C, S> {
    /// Creates a new application around a started session.
    pub fn new(session: GameSession<C, S>) -> Self {
        Self {
            session,
            input: String::new(),
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession<C, S> {
        &self.session
    }

    /// Gets the typed answer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fires any scheduled transition.
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    /// Applies a key action.
    pub fn handle(&mut self, action: Action, now: Instant) {
        debug!(?action, "Handling action");

        match action {
            Action::Type(c) => self.input.push(c),
            Action::Backspace => {
                self.input.pop();
            }
            Action::Submit => {
                let outcome = self.session.submit_answer(&self.input, now);
                debug!(?outcome, "Submitted answer");
                if outcome == SubmitOutcome::Ignored {
                    self.input.clear();
                }
            }
            Action::Continue => {
                if self.session.continue_game() {
                    self.input.clear();
                }
            }
            Action::Replay => {
                self.session.replay();
            }
            Action::Restart => {
                self.session.restart();
                self.input.clear();
            }
            Action::Quit => self.should_quit = true,
            Action::Ignore => {}
        }
    }
}
