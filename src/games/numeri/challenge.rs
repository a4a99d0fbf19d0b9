//! The number presented to the player.
//!
//! A challenge is an integer in `0..=100`, optionally followed by a one- or
//! two-digit fractional group. The group is stored the way the decimal
//! prints, so `5.10` and `5.1` are the same challenge.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A number to be spoken and transcribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawChallenge")]
pub struct Challenge {
    whole: u8,
    fraction: Option<u8>,
}

impl Challenge {
    /// Largest integer part with an Italian name in this drill.
    pub const MAX_WHOLE: u8 = 100;

    /// Largest fractional group.
    pub const MAX_FRACTION: u8 = 99;

    /// Creates an integer challenge.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::WholeOutOfRange`] above 100.
    pub fn integer(whole: u8) -> Result<Self, ChallengeError> {
        if whole > Self::MAX_WHOLE {
            return Err(ChallengeError::WholeOutOfRange(whole.into()));
        }
        Ok(Self {
            whole,
            fraction: None,
        })
    }

    /// Creates a decimal challenge from its integer part and fractional group.
    ///
    /// A trailing zero in the group is dropped (`10` becomes `1`).
    ///
    /// # Errors
    ///
    /// Returns an error when either part is out of range or the group is zero.
    pub fn decimal(whole: u8, fraction: u8) -> Result<Self, ChallengeError> {
        if whole > Self::MAX_WHOLE {
            return Err(ChallengeError::WholeOutOfRange(whole.into()));
        }
        if fraction == 0 || fraction > Self::MAX_FRACTION {
            return Err(ChallengeError::FractionOutOfRange(fraction));
        }
        Ok(Self::from_draw(whole, fraction))
    }

    /// Builds a challenge from values already known to be in range.
    pub(crate) fn from_draw(whole: u8, fraction: u8) -> Self {
        Self {
            whole,
            fraction: strip_trailing_zero(fraction),
        }
    }

    /// Returns the integer part.
    pub fn whole(&self) -> u8 {
        self.whole
    }

    /// Returns the fractional group, if any.
    pub fn fraction(&self) -> Option<u8> {
        self.fraction
    }

    /// Returns true if the challenge has a fractional group.
    pub fn is_decimal(&self) -> bool {
        self.fraction.is_some()
    }

    /// Formats the digits with the given decimal separator.
    pub fn digits(&self, separator: char) -> String {
        match self.fraction {
            Some(fraction) => format!("{}{}{}", self.whole, separator, fraction),
            None => self.whole.to_string(),
        }
    }

    /// Digits as spoken to an Italian voice (comma separator).
    pub fn spoken_digits(&self) -> String {
        self.digits(',')
    }
}

impl std::fmt::Display for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits('.'))
    }
}

impl FromStr for Challenge {
    type Err = ChallengeError;

    /// Parses `23`, `1.55` or `1,55`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole_str, fraction_str) = match s.split_once(['.', ',']) {
            Some((w, f)) => (w, Some(f)),
            None => (s, None),
        };

        if whole_str.is_empty() || !whole_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChallengeError::Malformed(s.to_string()));
        }
        let whole: u32 = whole_str
            .parse()
            .map_err(|_| ChallengeError::Malformed(s.to_string()))?;
        let whole = u8::try_from(whole)
            .ok()
            .filter(|w| *w <= Self::MAX_WHOLE)
            .ok_or(ChallengeError::WholeOutOfRange(whole))?;

        let Some(fraction_str) = fraction_str else {
            return Self::integer(whole);
        };

        if fraction_str.is_empty()
            || fraction_str.len() > 2
            || !fraction_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ChallengeError::Malformed(s.to_string()));
        }

        let trimmed = fraction_str.trim_end_matches('0');
        if trimmed.is_empty() {
            return Self::integer(whole);
        }
        if trimmed.starts_with('0') {
            return Err(ChallengeError::LeadingZeroFraction(s.to_string()));
        }

        let fraction: u8 = trimmed
            .parse()
            .map_err(|_| ChallengeError::Malformed(s.to_string()))?;
        Self::decimal(whole, fraction)
    }
}

/// Wire shape of a [`Challenge`], checked before it becomes one.
#[derive(Deserialize)]
struct RawChallenge {
    whole: u8,
    fraction: Option<u8>,
}

impl TryFrom<RawChallenge> for Challenge {
    type Error = ChallengeError;

    fn try_from(raw: RawChallenge) -> Result<Self, Self::Error> {
        match raw.fraction {
            Some(fraction) => Self::decimal(raw.whole, fraction),
            None => Self::integer(raw.whole),
        }
    }
}

fn strip_trailing_zero(fraction: u8) -> Option<u8> {
    match fraction {
        0 => None,
        f if f % 10 == 0 => Some(f / 10),
        f => Some(f),
    }
}

/// A number outside the drill's domain.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ChallengeError {
    /// Integer part above 100.
    #[display("Integer part {} is outside 0..=100", _0)]
    WholeOutOfRange(u32),

    /// Fractional group outside 1..=99.
    #[display("Fractional group {} is outside 1..=99", _0)]
    FractionOutOfRange(u8),

    /// A fractional group such as `05` that reads differently as a whole number.
    #[display("Fractional group in {:?} starts with zero", _0)]
    LeadingZeroFraction(String),

    /// Not a number at all.
    #[display("Cannot read {:?} as a number", _0)]
    Malformed(String),
}

impl std::error::Error for ChallengeError {}
