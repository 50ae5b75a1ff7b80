use serde::{Deserialize, Serialize};

/// Aggregated view of the current round's progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_sealed: bool,
}
