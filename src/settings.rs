//! Settings loaded from a TOML file.
//!
//! Every key is optional; missing keys fall back to defaults.
//!
//! ```toml
//! log_file = "strictly_numeri.log"
//!
//! [speech]
//! program = "espeak-ng"
//! locale = "it-IT"
//! rate = 0.8
//! words_per_minute = 175
//!
//! [timing]
//! game_over_delay_ms = 1500
//! shake_ms = 500
//! ```

use crate::speech::{DEFAULT_LOCALE, DEFAULT_RATE, VoiceProfile};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Shortest allowed pause between the losing answer and the game-over screen.
pub const MIN_GAME_OVER_DELAY_MS: u64 = 1000;

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Speech output.
    #[serde(default)]
    speech: SpeechSettings,

    /// Feedback timing.
    #[serde(default)]
    timing: TimingSettings,

    /// File receiving log output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

/// Speech program and voice preferences.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Program launched for each utterance.
    #[serde(default = "default_program")]
    program: String,

    /// Locale of the spoken numbers.
    #[serde(default = "default_locale")]
    locale: String,

    /// Relative speaking rate.
    #[serde(default = "default_rate")]
    rate: f32,

    /// Preferred voice; the locale's language is used when absent.
    #[serde(default)]
    voice: Option<String>,

    /// Normal speed of the program's voice.
    #[serde(default = "default_words_per_minute")]
    words_per_minute: u32,
}

/// Durations of the feedback windows.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Pause before the game-over screen, in milliseconds.
    #[serde(default = "default_game_over_delay_ms")]
    game_over_delay_ms: u64,

    /// Length of the shake cue, in milliseconds.
    #[serde(default = "default_shake_ms")]
    shake_ms: u64,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_numeri.log")
}

fn default_program() -> String {
    "espeak-ng".to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_rate() -> f32 {
    DEFAULT_RATE
}

fn default_words_per_minute() -> u32 {
    175
}

fn default_game_over_delay_ms() -> u64 {
    1500
}

fn default_shake_ms() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speech: SpeechSettings::default(),
            timing: TimingSettings::default(),
            log_file: default_log_file(),
        }
    }
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            locale: default_locale(),
            rate: default_rate(),
            voice: None,
            words_per_minute: default_words_per_minute(),
        }
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            game_over_delay_ms: default_game_over_delay_ms(),
            shake_ms: default_shake_ms(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(program = %settings.speech.program, "Settings loaded successfully");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads the file when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.game_over_delay_ms < MIN_GAME_OVER_DELAY_MS {
            return Err(ConfigError::new(format!(
                "game_over_delay_ms must be at least {}, got {}",
                MIN_GAME_OVER_DELAY_MS, self.timing.game_over_delay_ms
            )));
        }
        if !(self.speech.rate > 0.0 && self.speech.rate.is_finite()) {
            return Err(ConfigError::new(format!(
                "speech rate must be positive, got {}",
                self.speech.rate
            )));
        }
        Ok(())
    }
}

impl SpeechSettings {
    /// Voice preferences applied to each utterance.
    pub fn voice_profile(&self) -> VoiceProfile {
        VoiceProfile::new(self.locale.clone(), self.rate, self.voice.clone())
    }
}

impl TimingSettings {
    /// Pause before the game-over screen.
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    /// Length of the shake cue.
    pub fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
