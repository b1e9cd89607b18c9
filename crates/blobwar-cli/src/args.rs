//! Command-line argument parsing: the three positional arguments plus local
//! testing overrides.

use blobwar_core::{Board, BoardError, Cell, DeserializeError, HoleMask, Player};
use blobwar_engine::Strategy;
use clap::Parser;

/// `blobwar BOARD HOLES PLAYER [--strategy S] [--threads N]`.
///
/// `BOARD` and `HOLES` are comma-separated lists of exactly 64 tokens in
/// row-major order (`y * 8 + x`), matching the board layout used throughout
/// `blobwar-core`.
#[derive(Debug, Parser)]
#[command(name = "blobwar", about = "Blobwar search core")]
pub struct Cli {
    /// Serialized board: 64 comma-separated cells, each `-1` (empty), `0`
    /// (player 0's piece), or `1` (player 1's piece).
    pub board: String,

    /// Serialized hole mask: 64 comma-separated booleans (`true`/`false` or
    /// `1`/`0`).
    pub holes: String,

    /// Index of the player to move (`0` or `1`).
    pub player: String,

    /// Override the build-time default search strategy.
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Override the number of threads used by the parallel strategy. Only
    /// meaningful with `--strategy alphabeta-parallel`; the search itself
    /// always splits the root move list across one thread per tail move, so
    /// this is informational rather than a hard cap today.
    #[arg(long)]
    pub threads: Option<usize>,
}

/// CLI-facing mirror of [`Strategy`], so `clap`'s `ValueEnum` derive can
/// live outside `blobwar-engine` (which has no reason to depend on `clap`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    Greedy,
    Negamax,
    Alphabeta,
    AlphabetaParallel,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::Greedy => Strategy::Greedy,
            StrategyArg::Negamax => Strategy::Negamax,
            StrategyArg::Alphabeta => Strategy::AlphaBeta,
            StrategyArg::AlphabetaParallel => Strategy::AlphaBetaParallel,
        }
    }
}

/// Parse the `BOARD` argument into a [`Board`].
pub fn parse_board(raw: &str) -> Result<Board, DeserializeError> {
    let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    if tokens.len() != 64 {
        return Err(DeserializeError::WrongCellCount { what: "cells", found: tokens.len() });
    }

    let mut cells = [Cell::Empty; 64];
    for (i, tok) in tokens.iter().enumerate() {
        let value: i64 = tok
            .parse()
            .map_err(|_| DeserializeError::InvalidCellValue { found: i64::MIN })?;
        cells[i] = match value {
            -1 => Cell::Empty,
            0 => Cell::Piece(Player::First),
            1 => Cell::Piece(Player::Second),
            other => return Err(DeserializeError::InvalidCellValue { found: other }),
        };
    }

    Ok(Board::from_cells(cells))
}

/// Parse the `HOLES` argument into a [`HoleMask`].
pub fn parse_holes(raw: &str) -> Result<HoleMask, DeserializeError> {
    let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    if tokens.len() != 64 {
        return Err(DeserializeError::WrongCellCount { what: "holes", found: tokens.len() });
    }

    let mut flags = [false; 64];
    for (i, tok) in tokens.iter().enumerate() {
        flags[i] = match tok.to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => return Err(DeserializeError::InvalidHoleFlag { found: tok.to_string() }),
        };
    }

    Ok(HoleMask::from_flags(flags))
}

/// Parse the `PLAYER` argument into a [`Player`].
pub fn parse_player(raw: &str) -> Result<Player, DeserializeError> {
    let value: i64 = raw.parse().map_err(|_| DeserializeError::InvalidPlayer { found: i64::MIN })?;
    match value {
        0 => Ok(Player::First),
        1 => Ok(Player::Second),
        other => Err(DeserializeError::InvalidPlayer { found: other }),
    }
}

/// Validate that no piece sits on a hole: the one structural check that
/// spans both deserialized grids at once.
pub fn validate_board_holes(board: &Board, holes: &HoleMask) -> Result<(), DeserializeError> {
    for y in 0..blobwar_core::SIDE {
        for x in 0..blobwar_core::SIDE {
            if holes.get(x, y) && board.get(x, y) != Cell::Empty {
                return Err(BoardError::PieceOnHole { x, y }.into());
            }
        }
    }
    Ok(())
}
