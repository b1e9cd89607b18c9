//! The publication sink: the external callback through which the engine
//! announces its chosen move.

use blobwar_core::Move;

/// A process-wide sink accepting one move at a time. The core calls it zero
/// or more times per search; only the last call is authoritative. Re-expressed
/// as a trait (Design Note: "Pluggable publication sink") rather than the
/// original's raw function pointer, so the search driver can be handed any
/// implementation — shared memory, a channel, or a test probe.
pub trait PublishSink {
    /// Publish `mv` as the current best move found so far.
    fn publish(&self, mv: Move);
}

impl<F: Fn(Move)> PublishSink for F {
    fn publish(&self, mv: Move) {
        self(mv)
    }
}

/// A sink that records every publication, in order. Used by tests that need
/// to assert "last publisher wins" semantics.
#[derive(Debug, Default)]
pub struct RecordingSink {
    published: std::sync::Mutex<Vec<Move>>,
}

impl RecordingSink {
    /// An empty recorder.
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    /// All moves published, in publication order.
    pub fn history(&self) -> Vec<Move> {
        self.published.lock().expect("recording sink poisoned").clone()
    }

    /// The last move published, if any.
    pub fn last(&self) -> Option<Move> {
        self.history().last().copied()
    }
}

impl PublishSink for RecordingSink {
    fn publish(&self, mv: Move) {
        self.published.lock().expect("recording sink poisoned").push(mv);
    }
}
