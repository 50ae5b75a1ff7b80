use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a question inside the loaded `QuestionBank`.
///
/// Indices are zero-based and stable for the lifetime of the bank, which is
/// immutable once loaded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionIndex(usize);

impl QuestionIndex {
    /// Creates a new `QuestionIndex`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying usize value
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionIndex({})", self.0)
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an index from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIndexError;

impl fmt::Display for ParseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse QuestionIndex from string")
    }
}

impl std::error::Error for ParseIndexError {}

impl FromStr for QuestionIndex {
    type Err = ParseIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(QuestionIndex::new)
            .map_err(|_| ParseIndexError)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
