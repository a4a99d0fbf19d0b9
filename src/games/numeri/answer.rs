//! Answer normalization and the accepted forms of a challenge.

use super::challenge::Challenge;
use super::namer::italian_name;
use serde::Serialize;
use tracing::{debug, instrument};

/// Trims and lowercases raw input, or `None` when nothing was typed.
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// The four textual forms accepted for a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedAnswers {
    word: String,
    word_plain: String,
    digits_dot: String,
    digits_comma: String,
}

impl AcceptedAnswers {
    /// Builds the accepted forms for a challenge.
    #[instrument]
    pub fn for_challenge(challenge: &Challenge) -> Self {
        let word = italian_name(challenge).to_lowercase();
        let word_plain = word.replace('é', "e");
        Self {
            word,
            word_plain,
            digits_dot: challenge.digits('.'),
            digits_comma: challenge.digits(','),
        }
    }

    /// Word form with accents, e.g. "ventitré".
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Word form without accents, e.g. "ventitre".
    pub fn word_plain(&self) -> &str {
        &self.word_plain
    }

    /// Digits with a dot separator.
    pub fn digits_dot(&self) -> &str {
        &self.digits_dot
    }

    /// Digits with a comma separator.
    pub fn digits_comma(&self) -> &str {
        &self.digits_comma
    }

    /// All four forms, in display order.
    pub fn forms(&self) -> [&str; 4] {
        [
            self.word.as_str(),
            self.word_plain.as_str(),
            self.digits_dot.as_str(),
            self.digits_comma.as_str(),
        ]
    }

    /// Returns true if the raw input matches any accepted form.
    #[instrument(skip(self), fields(word = %self.word))]
    pub fn matches(&self, raw: &str) -> bool {
        let Some(input) = normalize_input(raw) else {
            return false;
        };
        let as_number = input.replacen(',', ".", 1);

        let accepted = input == self.word
            || input == self.word_plain
            || input == self.digits_comma
            || as_number == self.digits_dot;
        debug!(input = %input, accepted, "Checked answer");
        accepted
    }
}
