use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;

use quiz_core::model::QuestionIndex;

/// Picks the question indices for the next round.
///
/// Draws `min(round_size, available)` indices uniformly without replacement
/// from `0..total_n` minus the already-used set, so no question repeats
/// within a session. Returns `None` when every question has been consumed;
/// the session treats that as the cue to move to its summary, not as an
/// error.
///
/// The returned order is the presentation order for the round.
pub fn select_round<R: Rng + ?Sized>(
    total_n: usize,
    used: &BTreeSet<QuestionIndex>,
    round_size: usize,
    rng: &mut R,
) -> Option<Vec<QuestionIndex>> {
    let available: Vec<QuestionIndex> = (0..total_n)
        .map(QuestionIndex::new)
        .filter(|index| !used.contains(index))
        .collect();

    if available.is_empty() {
        return None;
    }

    let take = round_size.min(available.len());
    Some(
        available
            .choose_multiple(rng, take)
            .copied()
            .collect(),
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
