//! Make/unmake: applying a move in place and restoring the prior state.

use blobwar_core::{Board, Cell, Move, Player, Scores, in_bounds};

/// A snapshot of everything `apply` touches, taken before the call so that
/// `unmake` can restore the exact prior state. The source snapshots the
/// whole 8x8 board rather than recording only the cells touched — heavier,
/// but trivially correct and cheap enough at this board size (64 cells).
#[derive(Clone, Copy)]
pub struct Snapshot {
    board: Board,
    scores: Scores,
}

/// Apply `mv` for `player` in place, updating `scores` incrementally, and
/// return a snapshot that [`unmake`] can later restore.
///
/// 1. Clone (distance 1): the origin keeps its piece; `scores[player] += 1`
///    for the new piece at the destination.
/// 2. Jump (distance 2): the origin is vacated; the piece simply relocates,
///    so the score is unchanged by this step.
/// 3. The destination becomes `Piece(player)`.
/// 4. Every one of the 8 surrounding cells holding `Piece(opponent)` is
///    converted: one score point moves from the opponent to `player`.
pub fn apply(board: &mut Board, scores: &mut Scores, player: Player, mv: &Move) -> Snapshot {
    let snapshot = Snapshot { board: board.deep_copy(), scores: *scores };

    if mv.distance() == 1 {
        scores.add(player, 1);
    } else {
        board.set(mv.ox, mv.oy, Cell::Empty);
    }
    board.set(mv.nx, mv.ny, Cell::Piece(player));

    let opponent = player.opponent();
    for dy in -1..=1i16 {
        for dx in -1..=1i16 {
            let x = mv.nx as i16 + dx;
            let y = mv.ny as i16 + dy;
            if in_bounds(x, y) && board.get(x as u8, y as u8).is_piece_of(opponent) {
                board.set(x as u8, y as u8, Cell::Piece(player));
                scores.add(opponent, -1);
                scores.add(player, 1);
            }
        }
    }

    debug_assert_eq!(scores.get(player), board.count(player), "score/board mismatch for mover after apply");
    debug_assert_eq!(
        scores.get(opponent),
        board.count(opponent),
        "score/board mismatch for opponent after apply"
    );

    snapshot
}

/// Restore `board` and `scores` to the state captured by `snapshot`.
///
/// Round-trip law: for any board `B` and legal move `m`,
/// `apply(B, .., m)` followed by `unmake` with the returned snapshot
/// restores `B` bit-for-bit.
pub fn unmake(board: &mut Board, scores: &mut Scores, snapshot: Snapshot) {
    *board = snapshot.board;
    *scores = snapshot.scores;

    for p in Player::ALL {
        debug_assert_eq!(scores.get(p), board.count(p), "unmake did not restore score/board consistency for {p}");
    }
}

/// `estimate(scores, player)`: the leaf evaluation from `player`'s
/// perspective. The negamax recurrence negates it on ascent.
#[inline]
pub fn estimate(scores: &Scores, player: Player) -> i32 {
    scores.estimate(player)
}
