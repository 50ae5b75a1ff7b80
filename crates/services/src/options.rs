use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::BTreeSet;

use quiz_core::model::{OptionSet, OptionSetError};

/// Builds a randomized option set for one question.
///
/// Samples `k - 1` distinct distractors uniformly without replacement from
/// `pool` minus the correct value, appends the correct value, and shuffles.
/// When fewer distractors exist the set shrinks instead of failing; a pool
/// with no distractors at all yields the degenerate single-option set.
///
/// Pure given the random source; membership is decided by string equality,
/// so duplicate pool entries collapse into one candidate.
///
/// # Errors
///
/// Returns `OptionSetError` only if the assembled set would violate the
/// option-set invariants, which cannot happen for the inputs produced here
/// or by any caller passing a non-empty `correct`.
pub fn build_options<R: Rng + ?Sized>(
    correct: &str,
    pool: &[String],
    k: usize,
    rng: &mut R,
) -> Result<OptionSet, OptionSetError> {
    let candidates: BTreeSet<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|value| *value != correct)
        .collect();
    let candidates: Vec<&str> = candidates.into_iter().collect();

    let wanted = k.saturating_sub(1).min(candidates.len());
    let mut values: Vec<String> = candidates
        .choose_multiple(rng, wanted)
        .map(ToString::to_string)
        .collect();
    values.push(correct.to_string());
    values.shuffle(rng);

    OptionSet::new(values, correct)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
