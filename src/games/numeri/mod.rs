//! Italian number listening drill.

mod answer;
mod challenge;
mod generator;
mod level;
mod namer;
mod phases;
mod scoring;
mod session;
mod snapshot;

pub use answer::{AcceptedAnswers, normalize_input};
pub use challenge::{Challenge, ChallengeError};
pub use generator::{ChallengeSource, DECIMAL_CHANCE, RandomChallenges, draw_challenge};
pub use level::Level;
pub use namer::{DECIMAL_WORD, italian_name, name_integer};
pub use phases::{Feedback, Phase};
pub use scoring::{DECIMAL_POINTS, INTEGER_POINTS, base_points, multiplier, points};
pub use session::{GameSession, STARTING_LIVES, SessionConfig, SubmitOutcome};
pub use snapshot::Snapshot;
