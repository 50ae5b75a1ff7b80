use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionIndex;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question name cannot be empty")]
    EmptyName,

    #[error("question image reference cannot be empty")]
    EmptyImageRef,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank cannot be empty")]
    Empty,
}

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// A single quiz entry: a herb name paired with the image that shows it.
///
/// Records are immutable once loaded. Duplicate names are permitted (some
/// herb entries share synonyms); `image_ref` uniqueness is assumed but not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    name: String,
    image_ref: String,
}

impl QuestionRecord {
    /// Creates a record, rejecting empty fields.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyName` or `QuestionError::EmptyImageRef`
    /// when the corresponding field is empty after trimming.
    pub fn new(name: impl Into<String>, image_ref: impl Into<String>) -> Result<Self, QuestionError> {
        let name = name.into();
        let image_ref = image_ref.into();
        if name.trim().is_empty() {
            return Err(QuestionError::EmptyName);
        }
        if image_ref.trim().is_empty() {
            return Err(QuestionError::EmptyImageRef);
        }
        Ok(Self { name, image_ref })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Immutable ordered collection of quiz entries.
///
/// Built once from external tabular data (parsing is the loader's concern)
/// and read-only afterwards. Questions are addressed by `QuestionIndex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Creates a bank from loaded records.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if no records are provided; a session can
    /// never start without questions.
    pub fn new(records: Vec<QuestionRecord>) -> Result<Self, BankError> {
        if records.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of questions a session may draw from, given a universe cap.
    #[must_use]
    pub fn universe(&self, cap: usize) -> usize {
        self.records.len().min(cap)
    }

    #[must_use]
    pub fn get(&self, index: QuestionIndex) -> Option<&QuestionRecord> {
        self.records.get(index.value())
    }

    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// All names within the first `limit` records, in bank order.
    #[must_use]
    pub fn names(&self, limit: usize) -> Vec<String> {
        self.records
            .iter()
            .take(limit)
            .map(|r| r.name().to_string())
            .collect()
    }

    /// All image references within the first `limit` records, in bank order.
    #[must_use]
    pub fn image_refs(&self, limit: usize) -> Vec<String> {
        self.records
            .iter()
            .take(limit)
            .map(|r| r.image_ref().to_string())
            .collect()
    }

    /// Looks up the herb name behind an image reference.
    ///
    /// With duplicate image references the first match wins.
    #[must_use]
    pub fn name_for_image(&self, image_ref: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.image_ref() == image_ref)
            .map(QuestionRecord::name)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, image: &str) -> QuestionRecord {
        QuestionRecord::new(name, image).unwrap()
    }

    #[test]
    fn record_rejects_empty_fields() {
        let err = QuestionRecord::new("", "herb.jpg").unwrap_err();
        assert!(matches!(err, QuestionError::EmptyName));

        let err = QuestionRecord::new("Ginseng", "   ").unwrap_err();
        assert!(matches!(err, QuestionError::EmptyImageRef));
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuestionBank::new(Vec::new()).unwrap_err();
        assert!(matches!(err, BankError::Empty));
    }

    #[test]
    fn bank_lookup_by_index_and_image() {
        let bank = QuestionBank::new(vec![
            record("Ginseng", "ginseng.jpg"),
            record("Licorice", "licorice.jpg"),
        ])
        .unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(QuestionIndex::new(1)).unwrap().name(), "Licorice");
        assert!(bank.get(QuestionIndex::new(2)).is_none());
        assert_eq!(bank.name_for_image("ginseng.jpg"), Some("Ginseng"));
        assert_eq!(bank.name_for_image("missing.jpg"), None);
    }

    #[test]
    fn universe_is_capped() {
        let records = (0..5)
            .map(|i| record(&format!("Herb {i}"), &format!("herb_{i}.jpg")))
            .collect();
        let bank = QuestionBank::new(records).unwrap();

        assert_eq!(bank.universe(100), 5);
        assert_eq!(bank.universe(3), 3);
        assert_eq!(bank.names(3).len(), 3);
        assert_eq!(bank.image_refs(100).len(), 5);
    }
}
