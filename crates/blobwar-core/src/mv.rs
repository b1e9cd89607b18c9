//! The move record and its ordering heuristic.

use std::cmp::Ordering;
use std::fmt;

/// A move from `(ox, oy)` to `(nx, ny)`, carrying the heuristic score the
/// generator assigned it for ordering purposes.
///
/// Distance 1 (`max(|nx-ox|, |ny-oy|) == 1`) is a *clone*: the origin keeps
/// its piece and the destination gains a new one. Distance 2 is a *jump*:
/// the piece relocates and the origin becomes empty.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub ox: u8,
    pub oy: u8,
    pub nx: u8,
    pub ny: u8,
    /// Ordering heuristic assigned by the generator. Not part of move
    /// identity — two moves with the same coordinates and different scores
    /// are still the same move, so this field is ignored by `PartialEq`.
    pub score: u8,
}

impl Move {
    /// Construct a move with a zero ordering score.
    pub const fn new(ox: u8, oy: u8, nx: u8, ny: u8) -> Move {
        Move { ox, oy, nx, ny, score: 0 }
    }

    /// `max(|nx-ox|, |ny-oy|)`, always 1 (clone) or 2 (jump) for a legal
    /// move generated by [`crate::board::Board`]'s rules.
    #[inline]
    pub fn distance(&self) -> u8 {
        let dx = (self.nx as i16 - self.ox as i16).unsigned_abs() as u8;
        let dy = (self.ny as i16 - self.oy as i16).unsigned_abs() as u8;
        dx.max(dy)
    }

    /// `true` for a distance-1 clone move.
    #[inline]
    pub fn is_clone(&self) -> bool {
        self.distance() == 1
    }
}

impl PartialEq for Move {
    /// Moves are compared by coordinates only — `score` is ordering metadata,
    /// not part of move identity.
    fn eq(&self, other: &Self) -> bool {
        self.ox == other.ox && self.oy == other.oy && self.nx == other.nx && self.ny == other.ny
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})->({},{})", self.ox, self.oy, self.nx, self.ny)
    }
}

/// Strict weak order by descending `score`. Ties are broken by generation
/// order, so callers must use a stable sort (e.g. `slice::sort_by`) to
/// preserve that guarantee.
pub fn compare_by_score_desc(a: &Move, b: &Move) -> Ordering {
    b.score.cmp(&a.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_clone_vs_jump() {
        assert_eq!(Move::new(0, 0, 0, 1).distance(), 1);
        assert_eq!(Move::new(0, 0, 1, 1).distance(), 1);
        assert_eq!(Move::new(0, 0, 2, 0).distance(), 2);
        assert_eq!(Move::new(0, 0, 2, 2).distance(), 2);
        assert_eq!(Move::new(3, 3, 3, 5).distance(), 2);
    }

    #[test]
    fn is_clone_matches_distance() {
        assert!(Move::new(0, 0, 1, 0).is_clone());
        assert!(!Move::new(0, 0, 2, 0).is_clone());
    }

    #[test]
    fn score_ignored_by_equality() {
        let a = Move { score: 3, ..Move::new(0, 0, 1, 0) };
        let b = Move { score: 9, ..Move::new(0, 0, 1, 0) };
        assert_eq!(a, b);
    }

    #[test]
    fn sort_is_descending_by_score() {
        let mut moves = vec![
            Move { score: 1, ..Move::new(0, 0, 1, 0) },
            Move { score: 5, ..Move::new(0, 0, 1, 1) },
            Move { score: 3, ..Move::new(0, 0, 2, 0) },
        ];
        moves.sort_by(compare_by_score_desc);
        assert_eq!(moves.iter().map(|m| m.score).collect::<Vec<_>>(), vec![5, 3, 1]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut moves = vec![
            Move { score: 2, ..Move::new(0, 0, 1, 0) },
            Move { score: 2, ..Move::new(0, 0, 2, 0) },
            Move { score: 2, ..Move::new(0, 0, 3, 0) },
        ];
        moves.sort_by(compare_by_score_desc);
        assert_eq!(moves[0].nx, 1);
        assert_eq!(moves[1].nx, 2);
        assert_eq!(moves[2].nx, 3);
    }
}
