//! Shared test doubles.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;
use strictly_numeri::{
    Challenge, ChallengeSource, GameSession, Level, SessionConfig, Speaker, SpeechError,
    Utterance, VoiceProfile,
};

/// Challenges handed out in a fixed order; repeats the last one when empty.
#[derive(Debug, Clone)]
pub struct ScriptedChallenges {
    queue: VecDeque<Challenge>,
    last: Challenge,
    pub levels_seen: Vec<Level>,
}

impl ScriptedChallenges {
    pub fn new(challenges: impl IntoIterator<Item = Challenge>) -> Self {
        let queue: VecDeque<Challenge> = challenges.into_iter().collect();
        let last = *queue.back().expect("at least one challenge");
        Self {
            queue,
            last,
            levels_seen: Vec::new(),
        }
    }

    pub fn repeating(challenge: Challenge) -> Self {
        Self::new([challenge])
    }
}

impl ChallengeSource for ScriptedChallenges {
    fn next_challenge(&mut self, level: Level) -> Challenge {
        self.levels_seen.push(level);
        self.queue.pop_front().unwrap_or(self.last)
    }
}

/// Records every utterance it is asked to speak.
#[derive(Debug, Clone)]
pub struct RecordingSpeaker {
    available: bool,
    pub spoken: Rc<RefCell<Vec<Utterance>>>,
}

impl RecordingSpeaker {
    pub fn available() -> Self {
        Self {
            available: true,
            spoken: Rc::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            spoken: Rc::default(),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.spoken.borrow().iter().map(|u| u.text().clone()).collect()
    }
}

impl Speaker for RecordingSpeaker {
    fn is_available(&self) -> bool {
        self.available
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.spoken.borrow_mut().push(utterance.clone());
        Ok(())
    }
}

pub const GAME_OVER_DELAY: Duration = Duration::from_millis(1500);
pub const SHAKE: Duration = Duration::from_millis(500);

pub fn config() -> SessionConfig {
    SessionConfig::new(GAME_OVER_DELAY, SHAKE, VoiceProfile::default())
}

pub fn int(n: u8) -> Challenge {
    Challenge::integer(n).expect("in range")
}

pub fn session_with(
    challenges: impl IntoIterator<Item = Challenge>,
) -> GameSession<ScriptedChallenges, RecordingSpeaker> {
    GameSession::start(
        ScriptedChallenges::new(challenges),
        RecordingSpeaker::available(),
        config(),
    )
}
