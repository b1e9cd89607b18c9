//! Legal move generation and the ordering heuristic.

use blobwar_core::{Board, HoleMask, Move, Player, compare_by_score_desc, in_bounds};

/// The nine offsets `{-1, 0, 1} x {-1, 0, 1}`, used both by the ordering
/// heuristic and by `apply`'s conversion scan. `(0, 0)` is included for
/// fidelity with the original source: at generation time the destination is
/// still empty, so it never matches an opponent piece and contributes zero.
const NEIGHBOUR_OFFSETS: [(i16, i16); 9] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 0), (0, 1), (1, -1), (1, 0), (1, 1)];

/// `h(mv)`: `+1` if cloning, `+2` per adjacent enemy the move would convert.
pub fn heuristic(board: &Board, player: Player, mv: &Move) -> u8 {
    let opponent = player.opponent();
    let mut score: u16 = mv.is_clone() as u16;

    for (dx, dy) in NEIGHBOUR_OFFSETS {
        let x = mv.nx as i16 + dx;
        let y = mv.ny as i16 + dy;
        if in_bounds(x, y) && board.get(x as u8, y as u8).is_piece_of(opponent) {
            score += 2;
        }
    }

    score as u8
}

/// Enumerate every legal move for `player`, scored and sorted in
/// descending heuristic order (stable on ties).
///
/// Pure: does not mutate `board`.
pub fn generate(board: &Board, holes: &HoleMask, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();

    for oy in 0..8u8 {
        for ox in 0..8u8 {
            if !board.get(ox, oy).is_piece_of(player) {
                continue;
            }
            for dy in -2..=2i16 {
                for dx in -2..=2i16 {
                    let nx = ox as i16 + dx;
                    let ny = oy as i16 + dy;
                    if !board.is_empty_legal(nx, ny, holes) {
                        continue;
                    }
                    let mut mv = Move::new(ox, oy, nx as u8, ny as u8);
                    mv.score = heuristic(board, player, &mv);
                    moves.push(mv);
                }
            }
        }
    }

    moves.sort_by(compare_by_score_desc);
    moves
}

/// `numberOfMoves`: the count of legal moves each player *would* have if it
/// were to move, consulting `holes` exactly as [`generate`] does. Used only
/// by the adaptive depth estimator.
pub fn number_of_moves(board: &Board, holes: &HoleMask) -> (i64, i64) {
    let mut counts = [0i64; 2];

    for oy in 0..8u8 {
        for ox in 0..8u8 {
            let Some(player) = board.get(ox, oy).player() else {
                continue;
            };
            for dy in -2..=2i16 {
                for dx in -2..=2i16 {
                    let nx = ox as i16 + dx;
                    let ny = oy as i16 + dy;
                    if board.is_empty_legal(nx, ny, holes) {
                        counts[player.index()] += 1;
                    }
                }
            }
        }
    }

    (counts[0], counts[1])
}
