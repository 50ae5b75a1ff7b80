use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quiz_core::model::WrongAnswerEntry;

//
// ─── ROUND REPORT ──────────────────────────────────────────────────────────────
//

/// Immutable record of one sealed round.
///
/// `answered` may be below `total` when the round was sealed with open
/// questions; those count as consumed but are neither scored nor logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round_number: u32,
    pub score: usize,
    pub answered: usize,
    pub total: usize,
    pub wrong_entries: Vec<WrongAnswerEntry>,
    pub sealed_at: DateTime<Utc>,
}

//
// ─── SESSION SUMMARY ───────────────────────────────────────────────────────────
//

/// End-of-session roll-up shown on the summary screen: per-round scores,
/// overall totals, and the flattened wrong-answer review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds: Vec<RoundReport>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Number of rounds that were sealed during the session.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Correct answers across all sealed rounds.
    #[must_use]
    pub fn total_correct(&self) -> usize {
        self.rounds.iter().map(|r| r.score).sum()
    }

    /// Answered questions across all sealed rounds.
    #[must_use]
    pub fn total_answered(&self) -> usize {
        self.rounds.iter().map(|r| r.answered).sum()
    }

    /// Questions consumed across all sealed rounds, answered or not.
    #[must_use]
    pub fn total_consumed(&self) -> usize {
        self.rounds.iter().map(|r| r.total).sum()
    }

    /// Every recorded mistake, in round order.
    #[must_use]
    pub fn wrong_entries(&self) -> Vec<&WrongAnswerEntry> {
        self.rounds
            .iter()
            .flat_map(|r| r.wrong_entries.iter())
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionIndex;
    use quiz_core::time::fixed_now;

    fn report(round: u32, score: usize, answered: usize, total: usize) -> RoundReport {
        RoundReport {
            round_number: round,
            score,
            answered,
            total,
            wrong_entries: vec![WrongAnswerEntry::new(
                round,
                QuestionIndex::new(0),
                "Ginseng",
                "Licorice",
                "ginseng.jpg",
            )],
            sealed_at: fixed_now(),
        }
    }

    #[test]
    fn summary_totals_add_up() {
        let summary = SessionSummary {
            rounds: vec![report(1, 7, 10, 10), report(2, 4, 4, 5)],
            started_at: fixed_now(),
            completed_at: fixed_now(),
        };

        assert_eq!(summary.rounds_played(), 2);
        assert_eq!(summary.total_correct(), 11);
        assert_eq!(summary.total_answered(), 14);
        assert_eq!(summary.total_consumed(), 15);
        assert_eq!(summary.wrong_entries().len(), 2);
    }
}
