//! Text-to-speech collaborator.
//!
//! The session never waits on speech. A [`Speaker`] receives an
//! [`Utterance`] and either starts playing it or fails; failures are logged
//! and otherwise produce silence.

use crate::settings::SpeechSettings;
use derive_getters::Getters;
use derive_more::{Display, Error};
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, instrument, warn};

/// Locale the drill speaks in.
pub const DEFAULT_LOCALE: &str = "it-IT";

/// Speaking rate relative to the voice's normal speed.
pub const DEFAULT_RATE: f32 = 0.8;

/// Text to be spoken, with voice preferences.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Utterance {
    /// Text to speak.
    text: String,
    /// BCP 47 locale, e.g. `it-IT`.
    locale: String,
    /// Relative speaking rate.
    rate: f32,
    /// Preferred voice name, if any.
    voice: Option<String>,
}

impl Utterance {
    /// Creates an utterance in the default locale and rate.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: DEFAULT_LOCALE.to_string(),
            rate: DEFAULT_RATE,
            voice: None,
        }
    }

    /// Applies a voice profile.
    pub fn with_profile(mut self, profile: &VoiceProfile) -> Self {
        self.locale = profile.locale.clone();
        self.rate = profile.rate;
        self.voice = profile.voice.clone();
        self
    }

    /// Language subtag of the locale (`it` for `it-IT`).
    pub fn language(&self) -> String {
        self.locale
            .split(['-', '_'])
            .next()
            .unwrap_or(DEFAULT_LOCALE)
            .to_lowercase()
    }
}

/// Voice preferences applied to every utterance.
#[derive(Debug, Clone, PartialEq, Getters, derive_new::new)]
pub struct VoiceProfile {
    /// BCP 47 locale.
    locale: String,
    /// Relative speaking rate.
    rate: f32,
    /// Preferred voice name.
    voice: Option<String>,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            rate: DEFAULT_RATE,
            voice: None,
        }
    }
}

/// Speech output used by the game session.
pub trait Speaker {
    /// Whether speech can be produced in this environment.
    fn is_available(&self) -> bool;

    /// Starts speaking, cancelling anything still in flight.
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;
}

impl<T: Speaker + ?Sized> Speaker for Box<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        (**self).speak(utterance)
    }
}

/// A speaker that never produces sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&mut self, _utterance: &Utterance) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// Speaks by launching an external program such as `espeak-ng`.
///
/// The previous child is killed before a new one starts, so only one
/// utterance plays at a time.
#[derive(Debug)]
pub struct CommandSpeaker {
    program: String,
    words_per_minute: u32,
    available: bool,
    child: Option<Child>,
}

impl CommandSpeaker {
    /// Creates a speaker from settings and probes the program once.
    #[instrument(skip(settings), fields(program = %settings.program()))]
    pub fn new(settings: &SpeechSettings) -> Self {
        let program = settings.program().clone();
        let available = Self::probe(&program);
        if available {
            info!("Speech program available");
        } else {
            warn!("Speech program not found, replay disabled");
        }
        Self {
            program,
            words_per_minute: *settings.words_per_minute(),
            available,
            child: None,
        }
    }

    /// Returns true if `program --version` runs successfully.
    #[instrument]
    pub fn probe(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Command-line arguments for an utterance.
    pub fn arguments(&self, utterance: &Utterance) -> Vec<String> {
        let voice = utterance
            .voice()
            .clone()
            .unwrap_or_else(|| utterance.language());
        let speed = (self.words_per_minute as f32 * utterance.rate()).round().max(1.0) as u32;
        vec![
            "-v".to_string(),
            voice,
            "-s".to_string(),
            speed.to_string(),
            utterance.text().clone(),
        ]
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            debug!("Cancelling in-flight utterance");
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Speaker for CommandSpeaker {
    fn is_available(&self) -> bool {
        self.available
    }

    #[instrument(skip(self), fields(program = %self.program))]
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.cancel();
        let child = Command::new(&self.program)
            .args(self.arguments(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::new(format!("Failed to launch {}: {}", self.program, e)))?;
        debug!(pid = child.id(), "Utterance started");
        self.child = Some(child);
        Ok(())
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Speech error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Speech error: {} at {}:{}", message, file, line)]
pub struct SpeechError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SpeechError {
    /// Creates a new speech error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
