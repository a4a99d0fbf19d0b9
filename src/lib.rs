//! Strictly Numeri - Italian number listening drill
//!
//! A number is spoken aloud and the player types it back, as digits or as
//! Italian words. Correct answers build a streak multiplier and unlock
//! larger numbers; three mistakes end the game.
//!
//! # Architecture
//!
//! - **Namer**: Italian cardinal words for 0-100 and short decimals
//! - **Session**: answer checking, scoring, levelling, delayed game over
//! - **Speech**: fire-and-forget text-to-speech behind the [`Speaker`] trait
//! - **Settings**: TOML configuration
//!
//! # Example
//!
//! ```
//! use strictly_numeri::{Challenge, italian_name};
//!
//! let challenge: Challenge = "1,55".parse()?;
//! assert_eq!(italian_name(&challenge), "uno virgola cinquantacinque");
//! # Ok::<(), strictly_numeri::ChallengeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod settings;
mod speech;

// Crate-level exports - Drill types
pub use games::numeri::{
    AcceptedAnswers, Challenge, ChallengeError, ChallengeSource, DECIMAL_CHANCE, DECIMAL_POINTS,
    DECIMAL_WORD, Feedback, GameSession, INTEGER_POINTS, Level, Phase, RandomChallenges,
    STARTING_LIVES, SessionConfig, Snapshot, SubmitOutcome, base_points, draw_challenge,
    italian_name, multiplier, name_integer, normalize_input, points,
};

// Crate-level exports - Settings
pub use settings::{ConfigError, MIN_GAME_OVER_DELAY_MS, Settings, SpeechSettings, TimingSettings};

// Crate-level exports - Speech
pub use speech::{
    CommandSpeaker, DEFAULT_LOCALE, DEFAULT_RATE, SilentSpeaker, Speaker, SpeechError, Utterance,
    VoiceProfile,
};
