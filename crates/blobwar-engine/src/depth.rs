//! Adaptive depth estimator.

use blobwar_core::{Board, HoleMask};

use crate::generator::number_of_moves;

/// Deep search depth used whenever branching is too small to matter
/// (`n0 * n1 < 2`): the endgame is close, so search as deep as the cap
/// allows regardless of the node-count projection.
const ENDGAME_DEPTH: u32 = 4;

/// Hard cap on the estimated depth, independent of `limit`.
const MAX_DEPTH: u32 = 6;

/// `estimateMaxDepth(limit)`: grow `d` while the projected number of boards
/// `n0 * n1^d` stays `<= limit`, capped at [`MAX_DEPTH`]. Falls back to
/// [`ENDGAME_DEPTH`] when both sides barely have any moves.
pub fn estimate_max_depth(board: &Board, holes: &HoleMask, limit: i64) -> u32 {
    let (n0, n1) = number_of_moves(board, holes);
    estimate_max_depth_from_counts(n0, n1, limit)
}

/// Pure version of [`estimate_max_depth`] taking the move counts directly,
/// for use in unit tests and the seed scenario in the spec.
pub fn estimate_max_depth_from_counts(n0: i64, n1: i64, limit: i64) -> u32 {
    if n0.saturating_mul(n1) < 2 {
        return ENDGAME_DEPTH;
    }

    let mut depth = 0u32;
    let mut plays = n0;
    while depth < MAX_DEPTH {
        let next = plays.saturating_mul(n1);
        if next > limit {
            break;
        }
        depth += 1;
        plays = next;
    }
    depth
}
