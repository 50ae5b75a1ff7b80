use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("round size must be > 0")]
    InvalidRoundSize,

    #[error("max rounds must be > 0")]
    InvalidMaxRounds,

    #[error("universe cap must be > 0")]
    InvalidUniverseCap,

    #[error("invalid option count value: {0}")]
    InvalidOptionCount(u8),
}

//
// ─── OPTION COUNT ──────────────────────────────────────────────────────────────
//

/// How many choices a question offers.
///
/// The quiz variants in use are two-way (pick one of a pair of photos) and
/// four-way. Scarce distractors may still shrink an individual option set
/// below this count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionCount {
    Two,
    Four,
}

impl OptionCount {
    /// Converts a numeric count (2 or 4) to an `OptionCount`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOptionCount` for any other value.
    pub fn from_u8(value: u8) -> Result<Self, ConfigError> {
        match value {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            _ => Err(ConfigError::InvalidOptionCount(value)),
        }
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        match self {
            OptionCount::Two => 2,
            OptionCount::Four => 4,
        }
    }
}

//
// ─── QUIZ VARIANT ──────────────────────────────────────────────────────────────
//

/// Which direction a question is asked in.
///
/// `NameToImage` shows the herb name and offers photos; `ImageToName` shows
/// a photo and offers names. The variant decides which candidate pool the
/// option builder samples from and which value counts as correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizVariant {
    /// Prompt with the herb name, answer by picking the matching photo.
    NameToImage,
    /// Prompt with a photo, answer by picking the matching herb name.
    ImageToName,
}

//
// ─── SESSION CONFIG ────────────────────────────────────────────────────────────
//

/// Tunable parameters for a quiz session.
///
/// Defaults: rounds of 10 questions, two rounds per session, four-way
/// options, and at most 100 questions drawn per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    round_size: usize,
    max_rounds: u32,
    option_count: OptionCount,
    universe_cap: usize,
}

pub const DEFAULT_ROUND_SIZE: usize = 10;
pub const DEFAULT_MAX_ROUNDS: u32 = 2;
pub const DEFAULT_UNIVERSE_CAP: usize = 100;

impl SessionConfig {
    /// Creates a config, validating every field.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid field.
    pub fn new(
        round_size: usize,
        max_rounds: u32,
        option_count: OptionCount,
        universe_cap: usize,
    ) -> Result<Self, ConfigError> {
        if round_size == 0 {
            return Err(ConfigError::InvalidRoundSize);
        }
        if max_rounds == 0 {
            return Err(ConfigError::InvalidMaxRounds);
        }
        if universe_cap == 0 {
            return Err(ConfigError::InvalidUniverseCap);
        }
        Ok(Self {
            round_size,
            max_rounds,
            option_count,
            universe_cap,
        })
    }

    #[must_use]
    pub fn round_size(&self) -> usize {
        self.round_size
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn option_count(&self) -> OptionCount {
        self.option_count
    }

    #[must_use]
    pub fn universe_cap(&self) -> usize {
        self.universe_cap
    }

    /// Replaces the round size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRoundSize` for zero.
    pub fn with_round_size(mut self, round_size: usize) -> Result<Self, ConfigError> {
        if round_size == 0 {
            return Err(ConfigError::InvalidRoundSize);
        }
        self.round_size = round_size;
        Ok(self)
    }

    /// Replaces the round limit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMaxRounds` for zero.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Result<Self, ConfigError> {
        if max_rounds == 0 {
            return Err(ConfigError::InvalidMaxRounds);
        }
        self.max_rounds = max_rounds;
        Ok(self)
    }

    #[must_use]
    pub fn with_option_count(mut self, option_count: OptionCount) -> Self {
        self.option_count = option_count;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_size: DEFAULT_ROUND_SIZE,
            max_rounds: DEFAULT_MAX_ROUNDS,
            option_count: OptionCount::Four,
            universe_cap: DEFAULT_UNIVERSE_CAP,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
