#![forbid(unsafe_code)]

pub mod error;
pub mod options;
pub mod selector;
pub mod session;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use options::build_options;
pub use selector::select_round;

pub use session::{
    AdvanceOutcome, RoundProgress, RoundReport, SessionController, SessionPhase, SessionSummary,
    SubmitOutcome,
};
