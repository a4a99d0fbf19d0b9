//! The drill's state machine.
//!
//! A [`GameSession`] is mutated only through its entry points:
//! [`GameSession::submit_answer`], [`GameSession::continue_game`],
//! [`GameSession::restart`] and [`GameSession::tick`]. Time is passed in, so
//! the delayed game over is a stored deadline rather than a sleep.

use super::answer::{AcceptedAnswers, normalize_input};
use super::challenge::Challenge;
use super::generator::ChallengeSource;
use super::level::Level;
use super::namer::italian_name;
use super::phases::{Feedback, Phase};
use super::scoring;
use super::snapshot::Snapshot;
use crate::settings::Settings;
use crate::speech::{Speaker, Utterance, VoiceProfile};
use derive_getters::Getters;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Lives at the start of a session.
pub const STARTING_LIVES: u8 = 3;

/// Timing and voice used by a session.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SessionConfig {
    /// Pause between the losing answer and the game-over phase.
    game_over_delay: Duration,
    /// Length of the shake cue after a wrong answer.
    shake: Duration,
    /// Voice applied to spoken challenges.
    voice: VoiceProfile,
}

impl SessionConfig {
    /// Creates a session configuration.
    pub fn new(game_over_delay: Duration, shake: Duration, voice: VoiceProfile) -> Self {
        Self {
            game_over_delay,
            shake,
            voice,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SessionConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            game_over_delay: settings.timing().game_over_delay(),
            shake: settings.timing().shake(),
            voice: settings.speech().voice_profile(),
        }
    }
}

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened: blank input, feedback already shown, or game over.
    Ignored,
    /// The answer was accepted.
    Correct {
        /// Points added to the score.
        points: u32,
        /// Multiplier applied to the base points.
        multiplier: u32,
        /// New level, if this answer promoted the player.
        level_up: Option<Level>,
    },
    /// The answer was rejected.
    Incorrect {
        /// Lives remaining.
        lives: u8,
        /// True if the game-over transition is now scheduled.
        game_over_pending: bool,
    },
}

/// One drill session.
#[derive(Debug)]
pub struct GameSession<C, S> {
    source: C,
    speaker: S,
    config: SessionConfig,
    speech_available: bool,
    score: u32,
    streak: u32,
    max_streak: u32,
    lives: u8,
    level: Level,
    current: Challenge,
    feedback: Feedback,
    phase: Phase,
    last_award: Option<u32>,
    game_over_at: Option<Instant>,
    shake_until: Option<Instant>,
}

impl<C: ChallengeSource, S: Speaker> GameSession<C, S> {
    /// Starts a session at level 1 and speaks the first challenge.
    ///
    /// Speech availability is probed here, once.
    #[instrument(skip_all)]
    pub fn start(mut source: C, speaker: S, config: SessionConfig) -> Self {
        let speech_available = speaker.is_available();
        info!(speech_available, "Starting session");
        let current = source.next_challenge(Level::FIRST);
        let mut session = Self {
            source,
            speaker,
            config,
            speech_available,
            score: 0,
            streak: 0,
            max_streak: 0,
            lives: STARTING_LIVES,
            level: Level::FIRST,
            current,
            feedback: Feedback::Idle,
            phase: Phase::Playing,
            last_award: None,
            game_over_at: None,
            shake_until: None,
        };
        session.speak_current();
        session
    }

    /// Draws a new challenge for `level`, resets feedback and speaks it.
    #[instrument(skip(self))]
    pub fn generate_challenge(&mut self, level: Level) {
        self.current = self.source.next_challenge(level);
        self.feedback = Feedback::Idle;
        self.last_award = None;
        debug!(challenge = %self.current, "New challenge");
        self.speak_current();
    }

    /// Checks an answer against the current challenge.
    ///
    /// Ignored unless feedback is idle, the game is running and the input
    /// holds something besides whitespace.
    #[instrument(skip(self), fields(challenge = %self.current))]
    pub fn submit_answer(&mut self, raw: &str, now: Instant) -> SubmitOutcome {
        if self.feedback != Feedback::Idle
            || self.phase.is_over()
            || normalize_input(raw).is_none()
        {
            debug!("Submission ignored");
            return SubmitOutcome::Ignored;
        }

        if self.accepted_answers().matches(raw) {
            self.record_correct()
        } else {
            self.record_incorrect(now)
        }
    }

    fn record_correct(&mut self) -> SubmitOutcome {
        let multiplier = scoring::multiplier(self.streak);
        let points = scoring::points(&self.current, self.streak);

        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);
        self.score += points;
        self.feedback = Feedback::Correct;
        self.last_award = Some(points);

        let promoted = self.level.promoted(self.score);
        let level_up = (promoted != self.level).then_some(promoted);
        self.level = promoted;

        info!(
            points,
            multiplier,
            score = self.score,
            streak = self.streak,
            level = %self.level,
            "Correct answer"
        );
        SubmitOutcome::Correct {
            points,
            multiplier,
            level_up,
        }
    }

    fn record_incorrect(&mut self, now: Instant) -> SubmitOutcome {
        self.streak = 0;
        self.lives = self.lives.saturating_sub(1);
        self.feedback = Feedback::Incorrect;
        self.shake_until = Some(now + self.config.shake);

        let game_over_pending = self.lives == 0;
        if game_over_pending {
            self.game_over_at = Some(now + self.config.game_over_delay);
            info!(delay = ?self.config.game_over_delay, "Out of lives, game over scheduled");
        } else {
            info!(lives = self.lives, "Incorrect answer");
        }
        SubmitOutcome::Incorrect {
            lives: self.lives,
            game_over_pending,
        }
    }

    /// Moves on to the next challenge after feedback has been shown.
    ///
    /// Returns false when there is nothing to continue from.
    #[instrument(skip(self))]
    pub fn continue_game(&mut self) -> bool {
        if self.feedback == Feedback::Idle || self.lives == 0 || self.phase.is_over() {
            return false;
        }
        self.generate_challenge(self.level);
        true
    }

    /// Speaks the current challenge again.
    ///
    /// Returns false when speech is unavailable or the game is over.
    #[instrument(skip(self))]
    pub fn replay(&mut self) -> bool {
        if !self.speech_available || self.phase.is_over() {
            return false;
        }
        self.speak_current();
        true
    }

    /// Resets the whole session and draws a level-1 challenge.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(score = self.score, max_streak = self.max_streak, "Restarting session");
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.level = Level::FIRST;
        self.phase = Phase::Playing;
        self.game_over_at = None;
        self.shake_until = None;
        self.generate_challenge(Level::FIRST);
    }

    /// Fires the scheduled game over once its deadline has passed.
    ///
    /// Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.game_over_at
            && now >= deadline
        {
            self.game_over_at = None;
            self.phase = Phase::GameOver;
            info!(score = self.score, level = %self.level, "Game over");
            return true;
        }
        false
    }

    /// Returns true while the shake cue is running.
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_until.is_some_and(|until| now < until)
    }

    /// The four accepted forms of the current challenge.
    pub fn accepted_answers(&self) -> AcceptedAnswers {
        AcceptedAnswers::for_challenge(&self.current)
    }

    /// Read-only view for the render surface.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            streak: self.streak,
            max_streak: self.max_streak,
            multiplier: scoring::multiplier(self.streak),
            lives: self.lives,
            max_lives: STARTING_LIVES,
            level: self.level,
            level_cap: self.level.cap(),
            feedback: self.feedback,
            phase: self.phase,
            digits: self.current.spoken_digits(),
            words: italian_name(&self.current),
            last_award: self.last_award,
            speech_available: self.speech_available,
            game_over_pending: self.game_over_at.is_some(),
        }
    }

    fn speak_current(&mut self) {
        if !self.speech_available {
            return;
        }
        let utterance =
            Utterance::new(self.current.spoken_digits()).with_profile(&self.config.voice);
        if let Err(e) = self.speaker.speak(&utterance) {
            warn!(error = %e, "Speech failed");
        }
    }
}

impl<C, S> GameSession<C, S> {
    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Consecutive correct answers.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak this session.
    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Lives remaining.
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Current level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The challenge being answered.
    pub fn current(&self) -> &Challenge {
        &self.current
    }

    /// Feedback for the current challenge.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Session phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether speech was available at start.
    pub fn speech_available(&self) -> bool {
        self.speech_available
    }

    /// The speech collaborator.
    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// The challenge source.
    pub fn source(&self) -> &C {
        &self.source
    }
}
