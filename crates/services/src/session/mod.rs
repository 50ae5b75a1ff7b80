mod controller;
mod progress;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{AdvanceOutcome, SessionController, SessionPhase, SubmitOutcome};
pub use progress::RoundProgress;
pub use view::{RoundReport, SessionSummary};
