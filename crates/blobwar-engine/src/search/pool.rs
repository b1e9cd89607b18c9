//! Parallel alpha-beta: root split over a thread-per-tail-move pool.

use blobwar_core::{Board, HoleMask, Move, Player, Scores};

use crate::apply::{apply, unmake};
use crate::generator::generate;
use crate::sink::PublishSink;
use crate::stats::{SearchObserver, SearchStats};

use super::negamax::{INF, alpha_beta};

/// Root-split parallel alpha-beta.
///
/// Splits the ordered root move list into a sequential pre-pass over the
/// first `floor(n/4)` moves (to tighten `alpha` before forking) and a
/// parallel tail over the rest. The tail is run in chunks of at most
/// `num_threads` moves via [`std::thread::scope`] — never more than
/// `num_threads` OS threads alive at once, matching the teacher's own
/// `ThreadPool::set_num_threads` cap on its helper-thread count (no thread
/// pool crate, no unbounded thread-per-candidate fan-out).
///
/// Each spawned task owns an independent copy of `(board, scores, player)`;
/// the only data shared across tasks is `holes` (read-only) and `sink`. The
/// `(alpha, beta)` window captured at spawn time is not updated as peer
/// tasks within the same chunk improve it — a correctness-preserving loss of
/// pruning efficiency, intentional for simplicity per the spec's concurrency
/// contract. Alpha improvements from one chunk do carry into the next
/// chunk's spawn-time window, since chunks run one after another.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta_parallel<S, O>(
    depth: u32,
    board: &mut Board,
    scores: &mut Scores,
    holes: &HoleMask,
    player: &mut Player,
    num_threads: usize,
    sink: &S,
    observer: &O,
    stats: &mut SearchStats,
) -> i32
where
    S: PublishSink + Sync,
    O: SearchObserver + Sync,
{
    let num_threads = num_threads.max(1);

    if depth == 0 {
        return alpha_beta(
            depth, board, scores, holes, player, -INF, INF, true, sink, observer, stats,
        );
    }

    let moves = generate(board, holes, *player);
    stats.moves_considered += moves.len() as u64;
    stats.players_considered += scores.get(*player) as u64;
    observer.on_node(moves.len(), scores.get(*player));

    if moves.is_empty() {
        return alpha_beta(
            depth, board, scores, holes, player, -INF, INF, true, sink, observer, stats,
        );
    }

    let mut alpha = -INF;
    let beta = INF;

    // Publish the first move unconditionally, so a valid move is always
    // available even if every deeper comparison that follows somehow never
    // improves on it.
    sink.publish(moves[0]);
    observer.on_publish(moves[0]);

    let pre_pass_count = moves.len() / 4;

    for mv in &moves[..pre_pass_count] {
        let snapshot = apply(board, scores, *player, mv);
        let mut child_player = player.opponent();
        let score = -alpha_beta(
            depth - 1, board, scores, holes, &mut child_player, -beta, -alpha, false, sink,
            observer, stats,
        );
        unmake(board, scores, snapshot);

        if score > alpha {
            alpha = score;
            sink.publish(*mv);
            observer.on_publish(*mv);
        }
    }

    let root_player = *player;
    let tail = &moves[pre_pass_count..];

    for chunk in tail.chunks(num_threads) {
        let chunk_results: Vec<(Move, i32)> = std::thread::scope(|scope| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|mv| {
                    let mut task_board = board.deep_copy();
                    let mut task_scores = *scores;
                    let alpha_at_spawn = alpha;
                    scope.spawn(move || {
                        let mut task_stats = SearchStats::default();
                        let task_snapshot = apply(&mut task_board, &mut task_scores, root_player, mv);
                        let mut task_player = root_player.opponent();
                        let score = -alpha_beta(
                            depth - 1,
                            &mut task_board,
                            &mut task_scores,
                            holes,
                            &mut task_player,
                            -beta,
                            -alpha_at_spawn,
                            false,
                            sink,
                            observer,
                            &mut task_stats,
                        );
                        unmake(&mut task_board, &mut task_scores, task_snapshot);
                        (*mv, score, task_stats)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().expect("search task panicked"))
                .map(|(mv, score, task_stats)| {
                    stats.moves_considered += task_stats.moves_considered;
                    stats.players_considered += task_stats.players_considered;
                    stats.calculated_moves += task_stats.calculated_moves;
                    (mv, score)
                })
                .collect()
        });

        for (mv, score) in chunk_results {
            if score > alpha {
                alpha = score;
                sink.publish(mv);
                observer.on_publish(mv);
            }
        }
    }

    alpha
}
