//! The CLI's default search observer: forwards search progress to `tracing`.

use blobwar_core::Move;
use blobwar_engine::SearchObserver;

/// A zero-sized [`SearchObserver`] that logs every callback through
/// `tracing`, the way `cesso`'s own front-end logs engine progress rather
/// than printing directly. Node-level detail logs at `debug`; the
/// once-per-search depth choice and each publication log at `info`, since
/// those are the events an operator tailing the process actually wants to
/// see.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_node(&self, moves_at_node: usize, players_to_move: i32) {
        tracing::debug!(moves_at_node, players_to_move, "search node visited");
    }

    fn on_depth_chosen(&self, depth: u32) {
        tracing::info!(depth, "adaptive depth estimator chose search depth");
    }

    fn on_publish(&self, mv: Move) {
        tracing::info!(mv = %mv, "publishing candidate move");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_observer_does_not_panic() {
        let observer = TracingObserver;
        observer.on_node(5, 3);
        observer.on_depth_chosen(4);
        observer.on_publish(Move::new(0, 0, 1, 0));
    }
}
