//! Search strategies and the top-level driver.

pub mod negamax;
pub mod pool;

use blobwar_core::{Board, HoleMask, Move, Player, Scores};

use crate::depth::estimate_max_depth;
use crate::generator::generate;
use crate::sink::PublishSink;
use crate::stats::{SearchObserver, SearchStats};

use negamax::{INF, alpha_beta, greedy};
use pool::alpha_beta_parallel;

/// Which search strategy `compute_best_move` runs. A runtime value rather
/// than a build-time flag (Design Note: "Global mutable configuration ...
/// re-architect as fields of the search driver"); the root binary crate's
/// cargo features map one-to-one onto these variants for callers that still
/// want a compile-time default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single-ply greedy evaluation, no recursion.
    Greedy,
    /// Plain negamax, no pruning.
    Negamax,
    /// Fail-hard alpha-beta negamax.
    AlphaBeta,
    /// Alpha-beta with a root split across a thread-per-tail-move pool.
    AlphaBetaParallel,
}

/// Node-count limits for the adaptive depth estimator (spec §4.5.5), plus
/// the thread cap for [`Strategy::AlphaBetaParallel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Projected-board-count limit used by plain negamax.
    pub negamax_limit: i64,
    /// Projected-board-count limit used by (sequential or parallel) alpha-beta.
    pub alpha_beta_limit: i64,
    /// Upper bound on the number of root-move tasks the parallel strategy
    /// runs concurrently, defaulting to [`std::thread::available_parallelism`],
    /// the way the teacher's `ThreadPool::set_num_threads` bounds its own
    /// helper-thread count.
    pub num_threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            negamax_limit: 4_000_000,
            alpha_beta_limit: 8_000_000_000,
            num_threads: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        }
    }
}

/// The outcome of one `compute_best_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The depth the adaptive estimator chose (`0` for the greedy strategy,
    /// which never recurses).
    pub depth: u32,
    /// The negamax value of the chosen line, from the root player's
    /// perspective.
    pub score: i32,
    /// Accumulated counters for this search.
    pub stats: SearchStats,
}

/// The search driver: owns no persistent state between calls (no
/// transposition table, no opening book — single-shot fixed-depth search is
/// the entire strategy surface here).
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    pub config: SearchConfig,
}

impl Searcher {
    /// A searcher with the spec's default depth-estimator limits.
    pub fn new() -> Searcher {
        Searcher::default()
    }

    /// `computeBestMove()`: initialize the score vector from the board,
    /// then run `strategy`, publishing through `sink` at least once
    /// whenever any legal move exists.
    pub fn compute_best_move<S, O>(
        &self,
        strategy: Strategy,
        board: &mut Board,
        holes: &HoleMask,
        player: Player,
        sink: &S,
        observer: &O,
    ) -> SearchOutcome
    where
        S: PublishSink + Sync,
        O: SearchObserver + Sync,
    {
        let mut scores = Scores::zero();
        for p in blobwar_core::Player::ALL {
            scores.add(p, board.count(p));
        }

        let mut stats = SearchStats::default();

        match strategy {
            Strategy::Greedy => {
                let score = greedy(board, &mut scores, holes, player, true, sink, observer, &mut stats);
                stats.depth = 0;
                observer.on_depth_chosen(0);
                SearchOutcome { depth: 0, score, stats }
            }
            Strategy::Negamax => {
                let depth = estimate_max_depth(board, holes, self.config.negamax_limit);
                observer.on_depth_chosen(depth);
                let mut p = player;
                let score = negamax::negamax(depth, board, &mut scores, holes, &mut p, true, sink, observer, &mut stats);
                stats.depth = depth;
                SearchOutcome { depth, score, stats }
            }
            Strategy::AlphaBeta => {
                let depth = estimate_max_depth(board, holes, self.config.alpha_beta_limit);
                observer.on_depth_chosen(depth);
                let mut p = player;
                let score = alpha_beta(
                    depth, board, &mut scores, holes, &mut p, -INF, INF, true, sink, observer, &mut stats,
                );
                stats.depth = depth;
                SearchOutcome { depth, score, stats }
            }
            Strategy::AlphaBetaParallel => {
                let depth = estimate_max_depth(board, holes, self.config.alpha_beta_limit);
                observer.on_depth_chosen(depth);
                let mut p = player;
                let score = alpha_beta_parallel(
                    depth, board, &mut scores, holes, &mut p, self.config.num_threads, sink, observer,
                    &mut stats,
                );
                stats.depth = depth;
                SearchOutcome { depth, score, stats }
            }
        }
    }
}

/// `true` if `player` has at least one legal move on `board` given `holes`.
/// Convenience used by front-ends that need to detect "pass / game over"
/// before invoking the driver at all.
pub fn has_legal_move(board: &Board, holes: &HoleMask, player: Player) -> bool {
    !generate(board, holes, player).is_empty()
}

/// Re-exported so callers of this module do not need to import `Move`
/// directly just to reference the driver's own API surface.
pub type DriverMove = Move;
