//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{OptionSetError, QuestionIndex, RoundError};

/// Errors emitted by the session controller.
///
/// Exhaustion of the question pool is not represented here: running out of
/// unused questions is a normal transition to the session summary. These
/// variants signal contract violations by the caller, such as invoking a
/// transition from the wrong state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no unused questions available to start a round")]
    NoQuestionsAvailable,

    #[error("operation requires a round in progress")]
    RoundNotInProgress,

    #[error("operation requires a sealed round")]
    RoundNotSealed,

    #[error("round limit of {0} reached")]
    RoundLimitReached(u32),

    #[error("question index {0} is outside the question bank")]
    IndexOutOfBounds(QuestionIndex),

    #[error("session summary is only available once the session has finished")]
    SummaryUnavailable,

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    OptionSet(#[from] OptionSetError),
}
