//! Brute-force cross-card matching.

use crate::bank::CardBank;
use crate::metric::sum_squared_diff;
use crate::patch::Position;
use crate::util::{SpotMatchError, SpotMatchResult};
use tracing::debug;

/// Best-matching position pair across two cards, with its dissimilarity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Winning anchor position on the first card.
    pub position_a: Position,
    /// Winning anchor position on the second card.
    pub position_b: Position,
    /// Summed squared difference of the two signatures.
    pub score: u64,
}

/// Finds the cross-card signature pair with the lowest dissimilarity.
///
/// Every entry of `bank_a` is scored against every entry of `bank_b`. Only a
/// strictly smaller score replaces the current best, so exact ties resolve
/// first-seen in bank order, which is the order positions were supplied to
/// [`CardBank::build`]. The result always draws one position from each bank.
pub fn best_match(bank_a: &CardBank, bank_b: &CardBank) -> SpotMatchResult<Match> {
    if bank_a.is_empty() || bank_b.is_empty() {
        return Err(SpotMatchError::EmptyPositions);
    }

    let mut best: Option<Match> = None;
    for (pos_a, sig_a) in bank_a.entries() {
        for (pos_b, sig_b) in bank_b.entries() {
            let score = sum_squared_diff(sig_a.view(), sig_b.view())?;
            if best.as_ref().is_none_or(|m| score < m.score) {
                best = Some(Match {
                    position_a: *pos_a,
                    position_b: *pos_b,
                    score,
                });
            }
        }
    }

    let best = best.expect("both banks are non-empty");
    debug!(
        pairs = bank_a.len() * bank_b.len(),
        score = best.score,
        "selected best pair"
    );
    Ok(best)
}
