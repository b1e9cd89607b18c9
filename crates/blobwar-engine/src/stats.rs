//! Search statistics and the optional observer hook.
//!
//! The original source gated its counters behind `#ifdef _STAT` and stored
//! them as free-standing global atomics. Design Note: "Statistics belong on
//! an optional observer object" — here they are fields on a per-search
//! [`SearchStats`] snapshot, accumulated through an optional
//! [`SearchObserver`] rather than globals.

use blobwar_core::Move;

/// Counters accumulated over one `compute_best_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of times a leaf/greedy evaluation was performed.
    pub calculated_moves: u64,
    /// Total number of candidate moves considered across all visited nodes.
    pub moves_considered: u64,
    /// Sum of the side-to-move's piece count at every visited node — divide
    /// by `calculated_moves` for the average branching factor's numerator,
    /// mirroring the original's `moves / players` statistic.
    pub players_considered: u64,
    /// Search depth chosen by the adaptive estimator.
    pub depth: u32,
}

/// Observer hook for search progress. The default no-op implementation
/// (`()`) costs nothing; a caller that wants `tracing` output or live
/// statistics implements this trait instead.
pub trait SearchObserver {
    /// Called once a leaf (or greedy decision point) has been evaluated.
    fn on_node(&self, _moves_at_node: usize, _players_to_move: i32) {}

    /// Called once the adaptive depth estimator has chosen a depth.
    fn on_depth_chosen(&self, _depth: u32) {}

    /// Called every time the driver publishes a move.
    fn on_publish(&self, _mv: Move) {}
}

/// The zero-cost default observer.
impl SearchObserver for () {}
