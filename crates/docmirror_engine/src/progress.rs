use std::sync::mpsc;

use crate::RunEvent;

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: RunEvent);
}

/// Discards every event.
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: RunEvent) {}
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<RunEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<RunEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: RunEvent) {
        let _ = self.tx.send(event);
    }
}
