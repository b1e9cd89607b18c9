//! Concrete publication sinks for the CLI front-end.

use std::sync::Mutex;
use std::sync::mpsc::Sender;

use blobwar_core::Move;
use blobwar_engine::PublishSink;

/// Publishes the chosen move into a shared-memory segment addressed by a
/// well-known key, mirroring the original `launchStrategy.cc`'s
/// `saveBestMoveToShmem`. The shared-memory transport itself is the
/// out-of-scope external collaborator this core was built against — this
/// type is a thin shim that satisfies [`PublishSink`] and nothing more.
#[derive(Debug)]
pub struct ShmemSink {
    key: String,
    last: Mutex<Option<Move>>,
}

impl ShmemSink {
    /// Bind a sink to the shared-memory segment named `key`.
    pub fn new(key: impl Into<String>) -> ShmemSink {
        ShmemSink { key: key.into(), last: Mutex::new(None) }
    }

    /// The shared-memory key this sink writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The last move written, as observed by this process (not a read of
    /// the shared-memory segment itself).
    pub fn last(&self) -> Option<Move> {
        *self.last.lock().expect("shmem sink poisoned")
    }
}

impl PublishSink for ShmemSink {
    fn publish(&self, mv: Move) {
        *self.last.lock().expect("shmem sink poisoned") = Some(mv);
        tracing::debug!(key = %self.key, mv = %mv, "publishing move to shared memory");
    }
}

/// Publishes each move over an in-process channel. Used by tests and by
/// call sites that want to observe every publication, not just the final
/// one.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<Move>,
}

impl ChannelSink {
    /// Wrap a sender end of an `mpsc` channel as a sink.
    pub fn new(tx: Sender<Move>) -> ChannelSink {
        ChannelSink { tx }
    }
}

impl PublishSink for ChannelSink {
    fn publish(&self, mv: Move) {
        // The receiver may already be gone (e.g. a test only cares about
        // the first few publications); a dropped receiver is not this
        // sink's problem to report.
        let _ = self.tx.send(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shmem_sink_records_last_publish() {
        let sink = ShmemSink::new("blobwar/best-move");
        assert_eq!(sink.key(), "blobwar/best-move");
        assert!(sink.last().is_none());
        sink.publish(Move::new(0, 0, 0, 1));
        sink.publish(Move::new(0, 0, 1, 0));
        assert_eq!(sink.last(), Some(Move::new(0, 0, 1, 0)));
    }

    #[test]
    fn channel_sink_forwards_every_publish() {
        let (tx, rx) = std::sync::mpsc::channel();
        let sink = ChannelSink::new(tx);
        sink.publish(Move::new(0, 0, 0, 1));
        sink.publish(Move::new(0, 0, 2, 0));
        assert_eq!(rx.recv().unwrap(), Move::new(0, 0, 0, 1));
        assert_eq!(rx.recv().unwrap(), Move::new(0, 0, 2, 0));
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);
        let sink = ChannelSink::new(tx);
        sink.publish(Move::new(0, 0, 0, 1));
    }
}
