use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionIndex;

//
// ─── WRONG ANSWER LOG ──────────────────────────────────────────────────────────
//

/// Structured deduplication key for the wrong-answer log.
///
/// The same wrong choice on the same question within a round is logged at
/// most once. Picking a *different* wrong choice is a new entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WrongKey {
    pub round_number: u32,
    pub question_index: QuestionIndex,
    pub chosen_value: String,
}

/// One mistake recorded for end-of-session review.
///
/// Never mutated after it is appended to a sealed round's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswerEntry {
    pub round_number: u32,
    pub question_index: QuestionIndex,
    pub correct_name: String,
    pub chosen_name: String,
    pub image_ref: String,
}

impl WrongAnswerEntry {
    #[must_use]
    pub fn new(
        round_number: u32,
        question_index: QuestionIndex,
        correct_name: impl Into<String>,
        chosen_name: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            round_number,
            question_index,
            correct_name: correct_name.into(),
            chosen_name: chosen_name.into(),
            image_ref: image_ref.into(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn key(chosen_value: &str) -> WrongKey {
        WrongKey {
            round_number: 1,
            question_index: QuestionIndex::new(3),
            chosen_value: chosen_value.to_string(),
        }
    }

    #[test]
    fn keys_distinguish_choices_but_not_repeats() {
        assert_eq!(key("licorice.jpg"), key("licorice.jpg"));
        assert_ne!(key("licorice.jpg"), key("astragalus.jpg"));

        let entry = WrongAnswerEntry::new(
            1,
            QuestionIndex::new(3),
            "Ginseng",
            "Licorice",
            "ginseng.jpg",
        );
        assert_eq!(entry.correct_name, "Ginseng");
        assert_eq!(entry.image_ref, "ginseng.jpg");
    }
}
