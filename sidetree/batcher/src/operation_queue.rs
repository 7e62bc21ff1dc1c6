use std::{collections::VecDeque, sync::Mutex};

use sidetree_core::DIDSuffix;

/// An operation admitted for anchoring but not yet anchored.
#[derive(Clone, Debug)]
pub struct QueuedOperation {
    pub did_suffix: DIDSuffix,
    pub operation_buffer: Vec<u8>,
    /// Admission time; only used for operational visibility (batch writer age logging).
    pub enqueued_at: time::OffsetDateTime,
}

/// FIFO buffer of pending operations.  This is the only mutable shared state in the core:
/// one mutex serializes `add` against peek/remove pairs, so a cut (peek, then remove after
/// anchoring succeeds) observes a stable prefix while concurrent adds append behind it.
#[derive(Default)]
pub struct OperationQueue {
    queue_l: Mutex<VecDeque<QueuedOperation>>,
}

impl OperationQueue {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&self, did_suffix: DIDSuffix, operation_buffer: Vec<u8>) {
        let mut queue_g = self.queue_l.lock().unwrap();
        queue_g.push_back(QueuedOperation {
            did_suffix,
            operation_buffer,
            enqueued_at: time::OffsetDateTime::now_utc(),
        });
    }
    /// Clones up to `count` operations from the front of the queue without removing them.
    pub fn peek_batch(&self, count: usize) -> Vec<QueuedOperation> {
        let queue_g = self.queue_l.lock().unwrap();
        queue_g.iter().take(count).cloned().collect()
    }
    /// Removes up to `count` operations from the front of the queue.
    pub fn remove_batch(&self, count: usize) -> Vec<QueuedOperation> {
        let mut queue_g = self.queue_l.lock().unwrap();
        let count = count.min(queue_g.len());
        queue_g.drain(..count).collect()
    }
    pub fn len(&self) -> usize {
        self.queue_l.lock().unwrap().len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
