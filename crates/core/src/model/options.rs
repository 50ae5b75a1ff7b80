use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionSetError {
    #[error("option set cannot be empty")]
    Empty,

    #[error("option set contains duplicate value {0:?}")]
    DuplicateValue(String),

    #[error("correct value {0:?} is not among the options")]
    MissingCorrect(String),
}

//
// ─── OPTION SET ────────────────────────────────────────────────────────────────
//

/// The answer choices offered for one question.
///
/// Exactly one value is the designated correct answer; the rest are
/// distractors. The order is the randomized presentation order and carries no
/// other meaning — only membership and the correct flag matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    values: Vec<String>,
    correct: String,
}

impl OptionSet {
    /// Creates an option set, enforcing its invariants.
    ///
    /// # Errors
    ///
    /// Returns `OptionSetError::Empty` for an empty value list,
    /// `OptionSetError::DuplicateValue` if any value appears twice, and
    /// `OptionSetError::MissingCorrect` if `correct` is not among the values.
    pub fn new(values: Vec<String>, correct: impl Into<String>) -> Result<Self, OptionSetError> {
        let correct = correct.into();
        if values.is_empty() {
            return Err(OptionSetError::Empty);
        }

        let mut seen = HashSet::new();
        for value in &values {
            if !seen.insert(value.as_str()) {
                return Err(OptionSetError::DuplicateValue(value.clone()));
            }
        }

        if !seen.contains(correct.as_str()) {
            return Err(OptionSetError::MissingCorrect(correct));
        }

        Ok(Self { values, correct })
    }

    /// Options in presentation order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The designated correct value.
    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Whether the given choice is the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct == choice
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
