//! The command-line front-end: argument parsing, deserialization, and
//! wiring the search driver to a publication sink.

pub mod args;
pub mod error;
pub mod observer;
pub mod sink;

pub use args::{Cli, StrategyArg, parse_board, parse_holes, parse_player, validate_board_holes};
pub use error::CliError;
pub use observer::TracingObserver;
pub use sink::{ChannelSink, ShmemSink};

use blobwar_core::{Board, HoleMask, Player};
use blobwar_engine::{SearchConfig, SearchOutcome, Searcher, Strategy};
use clap::Parser;

/// The well-known shared-memory key `ShmemSink` publishes to when no
/// override is given.
pub const DEFAULT_SHMEM_KEY: &str = "blobwar/best-move";

/// Default strategy used when `--strategy` is not given, matching the
/// cargo-feature-selected default on the root binary crate.
pub const DEFAULT_STRATEGY: Strategy = Strategy::AlphaBetaParallel;

/// The three positional arguments, fully parsed and cross-validated.
pub struct Decoded {
    pub board: Board,
    pub holes: HoleMask,
    pub player: Player,
    pub strategy: Strategy,
    /// `--threads` override for the parallel strategy's thread cap; `None`
    /// keeps `SearchConfig`'s own `available_parallelism()` default.
    pub num_threads: Option<usize>,
}

/// Parse and validate the CLI's string arguments into [`Decoded`].
pub fn decode(cli: &Cli) -> Result<Decoded, CliError> {
    let board = parse_board(&cli.board).map_err(|source| CliError::Deserialize { what: "board", source })?;
    let holes = parse_holes(&cli.holes).map_err(|source| CliError::Deserialize { what: "holes", source })?;
    let player = parse_player(&cli.player).map_err(|source| CliError::Deserialize { what: "player", source })?;
    validate_board_holes(&board, &holes)
        .map_err(|source| CliError::Deserialize { what: "board/holes", source })?;

    let strategy = cli.strategy.map(Strategy::from).unwrap_or(DEFAULT_STRATEGY);

    Ok(Decoded { board, holes, player, strategy, num_threads: cli.threads })
}

/// Parse `argv` (including the program name, exactly as `std::env::args`
/// yields it). On a parse error, `clap` has already rendered a usage
/// message; the caller should write it to stderr and exit `1`, the
/// mandated contract (not `clap`'s own default exit code).
pub fn try_parse<I, T>(argv: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(argv)
}

/// Run one search to completion against `decoded`, publishing through
/// `sink` and logging progress through a [`TracingObserver`], returning the
/// search's outcome for the caller's own summary log line.
pub fn run_search<S>(decoded: &Decoded, sink: &S) -> SearchOutcome
where
    S: blobwar_engine::PublishSink + Sync,
{
    let mut config = SearchConfig::default();
    if let Some(num_threads) = decoded.num_threads {
        config.num_threads = num_threads.max(1);
    }

    let mut board = decoded.board;
    let searcher = Searcher { config };
    searcher.compute_best_move(
        decoded.strategy,
        &mut board,
        &decoded.holes,
        decoded.player,
        sink,
        &TracingObserver,
    )
}
