//! Error types for board/hole deserialization and structural validation.

use thiserror::Error;

/// Errors raised while validating a freshly constructed board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A coordinate passed to a public API was outside `0..8`.
    #[error("coordinate ({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// The offending x coordinate.
        x: i16,
        /// The offending y coordinate.
        y: i16,
    },
    /// A cell marked as a hole held a piece.
    #[error("hole at ({x}, {y}) is not empty")]
    PieceOnHole {
        /// The x coordinate of the offending cell.
        x: u8,
        /// The y coordinate of the offending cell.
        y: u8,
    },
}

/// Errors raised while deserializing a board, hole mask, or player index
/// supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeserializeError {
    /// The serialized grid did not contain exactly 64 values.
    #[error("expected 64 {what}, found {found}")]
    WrongCellCount {
        /// Name of the grid being parsed (`"cells"` or `"holes"`).
        what: &'static str,
        /// Number of values actually found.
        found: usize,
    },
    /// A board cell value was not in `{-1, 0, 1}`.
    #[error("invalid cell value {found}, expected -1, 0, or 1")]
    InvalidCellValue {
        /// The invalid value.
        found: i64,
    },
    /// A hole flag was not a recognized boolean token.
    #[error("invalid hole flag {found:?}, expected a boolean")]
    InvalidHoleFlag {
        /// The invalid token.
        found: String,
    },
    /// The player index was not `0` or `1`.
    #[error("invalid player index {found}, expected 0 or 1")]
    InvalidPlayer {
        /// The invalid value.
        found: i64,
    },
    /// The board failed structural validation after parsing.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_error_display() {
        let err = BoardError::OutOfBounds { x: 9, y: 0 };
        assert_eq!(format!("{err}"), "coordinate (9, 0) is out of bounds");
    }

    #[test]
    fn deserialize_error_from_board_error() {
        let board_err = BoardError::PieceOnHole { x: 1, y: 2 };
        let deser_err: DeserializeError = board_err.into();
        assert!(matches!(deser_err, DeserializeError::InvalidBoard { .. }));
    }
}
