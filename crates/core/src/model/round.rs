use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::model::config::QuizVariant;
use crate::model::ids::QuestionIndex;
use crate::model::options::OptionSet;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("round must contain at least one question")]
    Empty,

    #[error("duplicate question index {0} in round")]
    DuplicateIndex(QuestionIndex),

    #[error("round is already sealed")]
    Sealed,

    #[error("question {0} is not part of this round")]
    UnknownQuestion(QuestionIndex),

    #[error("choice {choice:?} is not among the offered options")]
    ChoiceNotOffered { choice: String },
}

//
// ─── ROUND QUESTION ────────────────────────────────────────────────────────────
//

/// One prepared question within a round: the bank entry it came from plus
/// the option set built for this presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundQuestion {
    index: QuestionIndex,
    name: String,
    image_ref: String,
    options: OptionSet,
}

impl RoundQuestion {
    #[must_use]
    pub fn new(
        index: QuestionIndex,
        name: impl Into<String>,
        image_ref: impl Into<String>,
        options: OptionSet,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            image_ref: image_ref.into(),
            options,
        }
    }

    #[must_use]
    pub fn index(&self) -> QuestionIndex {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// What the presentation layer shows for this question.
    #[must_use]
    pub fn prompt(&self, variant: QuizVariant) -> &str {
        match variant {
            QuizVariant::NameToImage => &self.name,
            QuizVariant::ImageToName => &self.image_ref,
        }
    }
}

//
// ─── ROUND STATE ───────────────────────────────────────────────────────────────
//

/// Mutable state of the round currently being played.
///
/// Answers may be overwritten freely until the round is sealed; afterwards
/// the round is immutable. The score is always derived by rescanning the
/// answer map, so resubmissions never double-count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    round_number: u32,
    questions: Vec<RoundQuestion>,
    answers: BTreeMap<QuestionIndex, String>,
    sealed: bool,
}

impl RoundState {
    /// Creates a round from prepared questions.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Empty` for no questions and
    /// `RoundError::DuplicateIndex` if a question index repeats.
    pub fn new(round_number: u32, questions: Vec<RoundQuestion>) -> Result<Self, RoundError> {
        if questions.is_empty() {
            return Err(RoundError::Empty);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.index()) {
                return Err(RoundError::DuplicateIndex(question.index()));
            }
        }
        Ok(Self {
            round_number,
            questions,
            answers: BTreeMap::new(),
            sealed: false,
        })
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Questions in presentation order.
    #[must_use]
    pub fn questions(&self) -> &[RoundQuestion] {
        &self.questions
    }

    /// Question indices in presentation order.
    #[must_use]
    pub fn indices(&self) -> Vec<QuestionIndex> {
        self.questions.iter().map(RoundQuestion::index).collect()
    }

    #[must_use]
    pub fn question(&self, index: QuestionIndex) -> Option<&RoundQuestion> {
        self.questions.iter().find(|q| q.index() == index)
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// The last submitted choice for a question, if any.
    #[must_use]
    pub fn answer(&self, index: QuestionIndex) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Records (or overwrites) the choice for one question.
    ///
    /// Returns whether the choice is correct.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Sealed` after `seal`, `RoundError::UnknownQuestion`
    /// for an index outside this round, and `RoundError::ChoiceNotOffered`
    /// for a value not in that question's option set.
    pub fn record_answer(
        &mut self,
        index: QuestionIndex,
        choice: impl Into<String>,
    ) -> Result<bool, RoundError> {
        if self.sealed {
            return Err(RoundError::Sealed);
        }
        let choice = choice.into();
        let Some(question) = self.question(index) else {
            return Err(RoundError::UnknownQuestion(index));
        };
        if !question.options().contains(&choice) {
            return Err(RoundError::ChoiceNotOffered { choice });
        }

        let correct = question.options().is_correct(&choice);
        self.answers.insert(index, choice);
        Ok(correct)
    }

    /// Number of questions whose last submitted answer is correct.
    ///
    /// Derived from the answer map on every call; unanswered questions do
    /// not count.
    #[must_use]
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| {
                self.answers
                    .get(&q.index())
                    .is_some_and(|choice| q.options().is_correct(choice))
            })
            .count()
    }

    /// Finalizes the round; all later mutation attempts fail.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Sealed` if already sealed.
    pub fn seal(&mut self) -> Result<(), RoundError> {
        if self.sealed {
            return Err(RoundError::Sealed);
        }
        self.sealed = true;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
