//! Greedy, plain negamax, and fail-hard alpha-beta negamax.

use blobwar_core::{Board, HoleMask, Player, Scores};

use crate::apply::{apply, estimate, unmake};
use crate::generator::generate;
use crate::sink::PublishSink;
use crate::stats::{SearchObserver, SearchStats};

/// Score representing an unreachable upper/lower bound, wide enough that no
/// reachable material differential (at most 64) can approach it.
pub const INF: i32 = 1_000_000;

/// `greedy()`: try every legal move by make/unmake, keep the one with the
/// maximal resulting [`estimate`]. Publishes the winner only when
/// `publish_from_root` is set — i.e. when greedy is the top-level strategy,
/// not when it is reached as the depth-0 base case of negamax/alpha-beta.
///
/// Returns [`estimate`] of the current position (not negated) if no move is
/// legal, without publishing anything.
pub fn greedy<S: PublishSink, O: SearchObserver>(
    board: &mut Board,
    scores: &mut Scores,
    holes: &HoleMask,
    player: Player,
    publish_from_root: bool,
    sink: &S,
    observer: &O,
    stats: &mut SearchStats,
) -> i32 {
    let moves = generate(board, holes, player);
    stats.moves_considered += moves.len() as u64;
    stats.players_considered += scores.get(player) as u64;
    observer.on_node(moves.len(), scores.get(player));

    if moves.is_empty() {
        return estimate(scores, player);
    }

    let mut best_score = -INF;
    let mut best_move = moves[0];

    for mv in &moves {
        let snapshot = apply(board, scores, player, mv);
        let score = estimate(scores, player);
        unmake(board, scores, snapshot);
        stats.calculated_moves += 1;

        if score > best_score {
            best_score = score;
            best_move = *mv;
        }
    }

    if publish_from_root {
        sink.publish(best_move);
        observer.on_publish(best_move);
    }

    best_score
}

/// `negamax(depth)`: plain negamax, no pruning.
///
/// At `depth == 0`, falls through to [`greedy`] (never publishing from
/// there) and toggles `player` once before returning, matching the
/// convention that every recursion level toggles on both entry and exit.
#[allow(clippy::too_many_arguments)]
pub fn negamax<S: PublishSink, O: SearchObserver>(
    depth: u32,
    board: &mut Board,
    scores: &mut Scores,
    holes: &HoleMask,
    player: &mut Player,
    is_root: bool,
    sink: &S,
    observer: &O,
    stats: &mut SearchStats,
) -> i32 {
    if depth == 0 {
        let score = greedy(board, scores, holes, *player, false, sink, observer, stats);
        *player = player.opponent();
        return score;
    }

    let moves = generate(board, holes, *player);
    stats.moves_considered += moves.len() as u64;
    stats.players_considered += scores.get(*player) as u64;
    observer.on_node(moves.len(), scores.get(*player));

    let mut best_score = -INF;

    if moves.is_empty() {
        *player = player.opponent();
        let score = -negamax(depth - 1, board, scores, holes, player, false, sink, observer, stats);
        if score > best_score {
            best_score = score;
        }
    }

    for mv in &moves {
        let snapshot = apply(board, scores, *player, mv);
        *player = player.opponent();
        let score = -negamax(depth - 1, board, scores, holes, player, false, sink, observer, stats);
        unmake(board, scores, snapshot);

        if score > best_score {
            best_score = score;
            if is_root {
                sink.publish(*mv);
                observer.on_publish(*mv);
            }
        }
    }

    *player = player.opponent();
    best_score
}

/// Fail-hard alpha-beta negamax: identical structure to [`negamax`] with the
/// standard `(alpha, beta)` window.
///
/// Open question resolved per the spec: when the side to move has no legal
/// moves, a single recursive "pass" call still runs and updates the window
/// (and may itself trigger the beta cutoff); the subsequent for-loop is then
/// empty and falls through to the final toggle-and-return.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<S: PublishSink, O: SearchObserver>(
    depth: u32,
    board: &mut Board,
    scores: &mut Scores,
    holes: &HoleMask,
    player: &mut Player,
    mut alpha: i32,
    beta: i32,
    is_root: bool,
    sink: &S,
    observer: &O,
    stats: &mut SearchStats,
) -> i32 {
    if depth == 0 {
        let score = greedy(board, scores, holes, *player, false, sink, observer, stats);
        *player = player.opponent();
        return score;
    }

    let moves = generate(board, holes, *player);
    stats.moves_considered += moves.len() as u64;
    stats.players_considered += scores.get(*player) as u64;
    observer.on_node(moves.len(), scores.get(*player));

    if moves.is_empty() {
        *player = player.opponent();
        let score = -alpha_beta(
            depth - 1,
            board,
            scores,
            holes,
            player,
            -beta,
            -alpha,
            false,
            sink,
            observer,
            stats,
        );

        if score > alpha {
            alpha = score;
        }
        if score >= beta {
            *player = player.opponent();
            return beta;
        }
    }

    for mv in &moves {
        let snapshot = apply(board, scores, *player, mv);
        *player = player.opponent();
        let score = -alpha_beta(
            depth - 1,
            board,
            scores,
            holes,
            player,
            -beta,
            -alpha,
            false,
            sink,
            observer,
            stats,
        );
        unmake(board, scores, snapshot);

        if score > alpha {
            alpha = score;
            if is_root {
                sink.publish(*mv);
                observer.on_publish(*mv);
            }
        }
        if score >= beta {
            *player = player.opponent();
            return beta;
        }
    }

    *player = player.opponent();
    alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use blobwar_core::Cell;

    fn filled_board(first: &[(u8, u8)], second: &[(u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(x, y) in first {
            board.set(x, y, Cell::Piece(Player::First));
        }
        for &(x, y) in second {
            board.set(x, y, Cell::Piece(Player::Second));
        }
        board
    }

    #[test]
    fn greedy_prefers_converting_move() {
        let mut board = filled_board(&[(0, 0)], &[(1, 1)]);
        let mut scores = Scores::zero();
        scores.add(Player::First, 1);
        scores.add(Player::Second, 1);
        let holes = HoleMask::none();
        let sink = RecordingSink::new();

        let score = greedy(&mut board, &mut scores, &holes, Player::First, true, &sink, &(), &mut SearchStats::default());

        assert_eq!(score, 3);
        let published = sink.last().expect("greedy should publish at root");
        assert_eq!((published.ox, published.oy), (0, 0));
    }

    #[test]
    fn greedy_no_moves_returns_estimate_without_publishing() {
        let mut board = filled_board(&[(0, 0)], &[]);
        let mut flags = [true; 64];
        flags[0] = false; // only (0,0) stays non-hole, and it's occupied
        let holes = HoleMask::from_flags(flags);
        let mut scores = Scores::zero();
        scores.add(Player::First, 1);
        let sink = RecordingSink::new();

        let score = greedy(&mut board, &mut scores, &holes, Player::First, true, &sink, &(), &mut SearchStats::default());
        assert_eq!(score, 1);
        assert!(sink.last().is_none());
    }

    #[test]
    fn negamax_pass_when_no_legal_moves() {
        let mut board = Board::empty();
        board.set(0, 0, Cell::Piece(Player::First));
        let mut flags = [true; 64];
        flags[0] = false;
        let holes = HoleMask::from_flags(flags);
        let mut scores = Scores::zero();
        scores.add(Player::First, 1);
        let mut player = Player::First;
        let sink = RecordingSink::new();

        let score = negamax(
            2, &mut board, &mut scores, &holes, &mut player, true, &sink, &(),
            &mut SearchStats::default(),
        );
        // Opponent also has no pieces, so every level is a pass; the
        // estimate never changes.
        assert_eq!(score, 1);
        assert!(sink.last().is_none());
    }

    #[test]
    fn alpha_beta_publishes_only_improving_moves_in_order() {
        let mut board = filled_board(&[(0, 0), (7, 0)], &[(1, 1), (6, 6)]);
        let mut scores = Scores::zero();
        scores.add(Player::First, 2);
        scores.add(Player::Second, 2);
        let holes = HoleMask::none();
        let mut player = Player::First;
        let sink = RecordingSink::new();

        let _ = alpha_beta(
            2, &mut board, &mut scores, &holes, &mut player, -INF, INF, true, &sink, &(),
            &mut SearchStats::default(),
        );

        assert!(sink.last().is_some());
        // The last publication must be one of the moves the engine actually
        // generated for player 0 from the original position.
        let holes2 = HoleMask::none();
        let fresh = filled_board(&[(0, 0), (7, 0)], &[(1, 1), (6, 6)]);
        let candidates = generate(&fresh, &holes2, Player::First);
        assert!(candidates.contains(&sink.last().unwrap()));
    }
}
