use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::fmt;

use quiz_core::Clock;
use quiz_core::model::{
    QuestionBank, QuestionIndex, QuizVariant, RoundQuestion, RoundState, SessionConfig,
    WrongAnswerEntry, WrongKey,
};

use super::progress::RoundProgress;
use super::view::{RoundReport, SessionSummary};
use crate::error::SessionError;
use crate::options::build_options;
use crate::selector::select_round;

//
// ─── PHASES AND OUTCOMES ───────────────────────────────────────────────────────
//

/// Where the session state machine currently is.
///
/// `RoundInProgress → RoundSealed → (RoundInProgress | Summary)`; `Summary`
/// is terminal except for a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    RoundInProgress,
    RoundSealed,
    Summary,
}

/// Immediate feedback for one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub is_correct: bool,
    /// Herb name behind the submitted choice, for the feedback line.
    pub chosen_name: String,
    /// Running score of the current round after this submission.
    pub round_score: usize,
}

/// Result of asking for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// A fresh round was drawn; its round number.
    NextRound(u32),
    /// Every question has been consumed; the session moved to its summary.
    SummaryReached,
}

//
// ─── SESSION CONTROLLER ────────────────────────────────────────────────────────
//

/// Owns all per-session quiz state and drives the round state machine.
///
/// All mutation goes through the transition methods below; the presentation
/// layer only ever reads. Answer submission is overwrite-based and scores are
/// derived by rescanning, so re-rendering layers may resubmit freely without
/// double counting.
pub struct SessionController {
    bank: QuestionBank,
    config: SessionConfig,
    variant: QuizVariant,
    clock: Clock,
    rng: StdRng,
    phase: SessionPhase,
    round: RoundState,
    used: BTreeSet<QuestionIndex>,
    history: Vec<RoundReport>,
    wrong_keys: BTreeSet<WrongKey>,
    wrong_entries: Vec<WrongAnswerEntry>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionController {
    /// Starts a session with the system clock and an OS-seeded RNG,
    /// drawing round 1 immediately.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if round 1 cannot be built, which for a
    /// non-empty bank cannot happen.
    pub fn new(
        bank: QuestionBank,
        config: SessionConfig,
        variant: QuizVariant,
    ) -> Result<Self, SessionError> {
        Self::with_clock_and_rng(bank, config, variant, Clock::default(), StdRng::from_os_rng())
    }

    /// Starts a session with an explicit clock and RNG, for deterministic
    /// tests and replays.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if round 1 cannot be built.
    pub fn with_clock_and_rng(
        bank: QuestionBank,
        config: SessionConfig,
        variant: QuizVariant,
        clock: Clock,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        let total = bank.universe(config.universe_cap());
        let used = BTreeSet::new();
        let indices = select_round(total, &used, config.round_size(), &mut rng)
            .ok_or(SessionError::NoQuestionsAvailable)?;
        let questions = Self::prepare_questions(&bank, &config, variant, &indices, &mut rng)?;
        let round = RoundState::new(1, questions)?;
        let started_at = clock.now();

        Ok(Self {
            bank,
            config,
            variant,
            clock,
            rng,
            phase: SessionPhase::RoundInProgress,
            round,
            used,
            history: Vec::new(),
            wrong_keys: BTreeSet::new(),
            wrong_entries: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    fn prepare_questions(
        bank: &QuestionBank,
        config: &SessionConfig,
        variant: QuizVariant,
        indices: &[QuestionIndex],
        rng: &mut StdRng,
    ) -> Result<Vec<RoundQuestion>, SessionError> {
        let total = bank.universe(config.universe_cap());
        let pool = match variant {
            QuizVariant::NameToImage => bank.image_refs(total),
            QuizVariant::ImageToName => bank.names(total),
        };
        let k = config.option_count().as_usize();

        let mut questions = Vec::with_capacity(indices.len());
        for &index in indices {
            let record = bank
                .get(index)
                .ok_or(SessionError::IndexOutOfBounds(index))?;
            let correct = match variant {
                QuizVariant::NameToImage => record.image_ref(),
                QuizVariant::ImageToName => record.name(),
            };
            let options = build_options(correct, &pool, k, rng)?;
            questions.push(RoundQuestion::new(
                index,
                record.name(),
                record.image_ref(),
                options,
            ));
        }
        Ok(questions)
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Records (or overwrites) the choice for one question of the current
    /// round and returns immediate feedback.
    ///
    /// Wrong choices are appended to the round's wrong-answer log,
    /// deduplicated by `(round, question, choice)`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundNotInProgress` outside an open round and
    /// propagates `RoundError` for an index or choice that was never offered.
    pub fn submit_answer(
        &mut self,
        index: QuestionIndex,
        choice: &str,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.phase != SessionPhase::RoundInProgress {
            return Err(SessionError::RoundNotInProgress);
        }

        let is_correct = self.round.record_answer(index, choice)?;
        let question = self
            .round
            .question(index)
            .ok_or(SessionError::IndexOutOfBounds(index))?;

        let chosen_name = if is_correct {
            question.name().to_string()
        } else {
            self.resolve_name(choice)
        };

        if !is_correct {
            let key = WrongKey {
                round_number: self.round.round_number(),
                question_index: index,
                chosen_value: choice.to_string(),
            };
            if self.wrong_keys.insert(key) {
                self.wrong_entries.push(WrongAnswerEntry::new(
                    self.round.round_number(),
                    index,
                    question.name(),
                    chosen_name.clone(),
                    question.image_ref(),
                ));
            }
        }

        Ok(SubmitOutcome {
            is_correct,
            chosen_name,
            round_score: self.round.score(),
        })
    }

    /// Finalizes the current round: answers become immutable, its questions
    /// are consumed, and its score and mistakes join the session history.
    ///
    /// Unanswered questions are consumed but neither scored nor logged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundNotInProgress` unless a round is open.
    pub fn seal_round(&mut self) -> Result<&RoundReport, SessionError> {
        if self.phase != SessionPhase::RoundInProgress {
            return Err(SessionError::RoundNotInProgress);
        }
        self.round.seal()?;
        self.used.extend(self.round.indices());

        self.history.push(RoundReport {
            round_number: self.round.round_number(),
            score: self.round.score(),
            answered: self.round.answered_count(),
            total: self.round.total(),
            wrong_entries: std::mem::take(&mut self.wrong_entries),
            sealed_at: self.clock.now(),
        });
        self.wrong_keys.clear();
        self.phase = SessionPhase::RoundSealed;

        self.history.last().ok_or(SessionError::RoundNotSealed)
    }

    /// Draws the next round, or moves to the summary when the question pool
    /// is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundNotSealed` unless the current round is
    /// sealed, and `SessionError::RoundLimitReached` past the configured
    /// round limit. Pool exhaustion is not an error.
    pub fn advance_round(&mut self) -> Result<AdvanceOutcome, SessionError> {
        if self.phase != SessionPhase::RoundSealed {
            return Err(SessionError::RoundNotSealed);
        }

        // Exhaustion wins over the round limit: with nothing left to ask the
        // session moves straight to its summary.
        let total = self.bank.universe(self.config.universe_cap());
        if self.used.len() >= total {
            self.enter_summary();
            return Ok(AdvanceOutcome::SummaryReached);
        }
        if self.round.round_number() >= self.config.max_rounds() {
            return Err(SessionError::RoundLimitReached(self.config.max_rounds()));
        }

        let Some(indices) =
            select_round(total, &self.used, self.config.round_size(), &mut self.rng)
        else {
            self.enter_summary();
            return Ok(AdvanceOutcome::SummaryReached);
        };

        let next_number = self.round.round_number() + 1;
        let questions = Self::prepare_questions(
            &self.bank,
            &self.config,
            self.variant,
            &indices,
            &mut self.rng,
        )?;
        self.round = RoundState::new(next_number, questions)?;
        self.phase = SessionPhase::RoundInProgress;
        Ok(AdvanceOutcome::NextRound(next_number))
    }

    /// Ends the session after a sealed round, even if unused questions and
    /// rounds remain.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RoundNotSealed` unless the current round is
    /// sealed.
    pub fn finish_session(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::RoundSealed {
            return Err(SessionError::RoundNotSealed);
        }
        self.enter_summary();
        Ok(())
    }

    /// Discards all session state and starts over at round 1 with a fresh
    /// draw over the full question universe. Valid from any phase.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the fresh round cannot be built.
    pub fn reset_session(&mut self) -> Result<(), SessionError> {
        self.used.clear();
        self.history.clear();
        self.wrong_keys.clear();
        self.wrong_entries.clear();
        self.completed_at = None;

        let total = self.bank.universe(self.config.universe_cap());
        let indices = select_round(total, &self.used, self.config.round_size(), &mut self.rng)
            .ok_or(SessionError::NoQuestionsAvailable)?;
        let questions = Self::prepare_questions(
            &self.bank,
            &self.config,
            self.variant,
            &indices,
            &mut self.rng,
        )?;
        self.round = RoundState::new(1, questions)?;
        self.phase = SessionPhase::RoundInProgress;
        self.started_at = self.clock.now();
        Ok(())
    }

    fn enter_summary(&mut self) {
        self.phase = SessionPhase::Summary;
        self.completed_at = Some(self.clock.now());
    }

    fn resolve_name(&self, choice: &str) -> String {
        match self.variant {
            QuizVariant::NameToImage => self
                .bank
                .name_for_image(choice)
                .unwrap_or(choice)
                .to_string(),
            QuizVariant::ImageToName => choice.to_string(),
        }
    }

    //
    // ─── READ-ONLY ACCESSORS ───────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn variant(&self) -> QuizVariant {
        self.variant
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The round currently being played or just sealed.
    #[must_use]
    pub fn current_round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round.round_number()
    }

    /// Running score of the current round, derived from its answer map.
    #[must_use]
    pub fn running_score(&self) -> usize {
        self.round.score()
    }

    /// Progress of the current round.
    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        RoundProgress {
            total: self.round.total(),
            answered: self.round.answered_count(),
            remaining: self.round.total().saturating_sub(self.round.answered_count()),
            is_sealed: self.round.is_sealed(),
        }
    }

    /// Indices consumed by sealed rounds; grows monotonically until reset.
    #[must_use]
    pub fn used_indices(&self) -> &BTreeSet<QuestionIndex> {
        &self.used
    }

    /// Reports of all sealed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    /// Mistakes recorded in the round currently being played.
    #[must_use]
    pub fn wrong_log(&self) -> &[WrongAnswerEntry] {
        &self.wrong_entries
    }

    /// Size of the question universe this session draws from.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.universe(self.config.universe_cap())
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The end-of-session roll-up.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SummaryUnavailable` before the session reaches
    /// its summary phase.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        if self.phase != SessionPhase::Summary {
            return Err(SessionError::SummaryUnavailable);
        }
        let completed_at = self.completed_at.ok_or(SessionError::SummaryUnavailable)?;
        Ok(SessionSummary {
            rounds: self.history.clone(),
            started_at: self.started_at,
            completed_at,
        })
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("variant", &self.variant)
            .field("phase", &self.phase)
            .field("round_number", &self.round.round_number())
            .field("used_len", &self.used.len())
            .field("history_len", &self.history.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
