use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use blobwar_cli::sink::ShmemSink;
use blobwar_cli::{DEFAULT_SHMEM_KEY, decode, run_search, try_parse};
use blobwar_engine::Strategy;

/// The strategy selected by this build's cargo features, used whenever
/// `--strategy` is not given on the command line. Exactly one of
/// `greedy` / `negamax` / `alphabeta` / `alphabeta-parallel` is active per
/// build, mirroring the original's build-time `{GREEDY, MINMAX,
/// MINMAXALPHABETA, MINMAXALPHABETAPARALLEL}` selector.
#[cfg(feature = "greedy")]
const BUILD_STRATEGY: Strategy = Strategy::Greedy;
#[cfg(all(feature = "negamax", not(feature = "greedy")))]
const BUILD_STRATEGY: Strategy = Strategy::Negamax;
#[cfg(all(feature = "alphabeta", not(any(feature = "greedy", feature = "negamax"))))]
const BUILD_STRATEGY: Strategy = Strategy::AlphaBeta;
#[cfg(all(
    feature = "alphabeta-parallel",
    not(any(feature = "greedy", feature = "negamax", feature = "alphabeta"))
))]
const BUILD_STRATEGY: Strategy = Strategy::AlphaBetaParallel;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt::init();

    let argv: Vec<String> = std::env::args().collect();
    let cli = match try_parse(&argv) {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let decoded = match decode(&cli) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("blobwar: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let strategy = cli.strategy.map(Strategy::from).unwrap_or(BUILD_STRATEGY);
    let decoded = blobwar_cli::Decoded { strategy, ..decoded };

    let sink = ShmemSink::new(DEFAULT_SHMEM_KEY);
    let outcome = run_search(&decoded, &sink);

    info!(
        depth = outcome.depth,
        score = outcome.score,
        calculated_moves = outcome.stats.calculated_moves,
        moves_considered = outcome.stats.moves_considered,
        players_considered = outcome.stats.players_considered,
        published = ?sink.last(),
        "search complete"
    );

    Ok(ExitCode::SUCCESS)
}
