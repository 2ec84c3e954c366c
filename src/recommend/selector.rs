//! Final selection.
//!
//! Picks one problem uniformly at random from the ranked list. The ranking
//! determines pool membership only, not selection weight — kept as shipped,
//! flagged for product clarification in DESIGN.md.

use rand::Rng;

use crate::error::RecommendError;
use crate::types::Problem;

/// Pick one candidate uniformly at random.
///
/// Fails with [`RecommendError::NoCandidates`] on an empty list rather than
/// sampling an empty range.
pub fn select_one<'a, R: Rng + ?Sized>(
    ranked: &'a [Problem],
    rng: &mut R,
) -> Result<&'a Problem, RecommendError> {
    if ranked.is_empty() {
        return Err(RecommendError::NoCandidates);
    }
    let index = rng.gen_range(0..ranked.len());
    Ok(&ranked[index])
}
