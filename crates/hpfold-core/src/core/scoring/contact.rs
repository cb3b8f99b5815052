use super::score::Score;
use crate::core::lattice::walk::Walker;
use crate::core::models::direction::Direction;
use crate::core::models::sequence::HpSequence;
use tracing::{instrument, trace};

/// Counts self-overlaps and hydrophobic contacts of a fold.
///
/// An outer walker advances one residue per iteration. For residue `i`, a copy of
/// the outer walker replays the remaining turns and visits every later residue
/// `k = j + 1`. Pairs with `k == i + 1` are bonded and skipped; every other pair
/// is examined exactly once:
///
/// - same cell: one overlap;
/// - both hydrophobic and at lattice distance 1: one contact.
///
/// Cost is O(L^2) in the number of turns. The caller guarantees
/// `sequence.len() == turns.len() + 1`.
#[instrument(level = "trace", skip_all, fields(turns = turns.len()))]
pub fn scan(turns: &[Direction], sequence: &HpSequence) -> Score {
    debug_assert_eq!(sequence.len(), turns.len() + 1);

    let mut overlaps = 0;
    let mut energy = 0;
    let mut current = Walker::start();

    for i in 0..turns.len() {
        let origin = current.position;
        let hydrophobic_i = sequence.is_hydrophobic(i);
        let mut probe = current;

        for (j, &turn) in turns.iter().enumerate().skip(i) {
            probe = probe.step(turn);
            if j == i {
                continue;
            }

            if probe.position == origin {
                overlaps += 1;
            }
            if hydrophobic_i && sequence.is_hydrophobic(j + 1) && origin.is_adjacent(probe.position)
            {
                trace!(i, k = j + 1, "Hydrophobic contact.");
                energy += 1;
            }
        }

        current = current.step(turns[i]);
    }

    Score::from_counts(overlaps, energy)
}
