use sidetree_core::ProtocolParameters;

use crate::{Error, OperationQueue, QueuedOperation, Result};

/// Selects the longest prefix of the queue whose operation count stays within
/// `max_operations_per_batch` and whose cumulative encoded size stays within
/// `max_batch_size_bytes`.  The queue is not modified: the caller removes the cut operations
/// only once the batch has been durably anchored.
///
/// An empty queue yields an empty cut.  A front operation that alone exceeds the byte cap can
/// never be anchored under this protocol version; that is a permanent error surfaced to the
/// caller, not a silent drop.
pub fn cut_batch(
    queue: &OperationQueue,
    protocol: &ProtocolParameters,
) -> Result<Vec<QueuedOperation>> {
    let candidate_v = queue.peek_batch(protocol.max_operations_per_batch);
    let Some(front_operation) = candidate_v.first() else {
        return Ok(Vec::new());
    };
    if front_operation.operation_buffer.len() > protocol.max_batch_size_bytes {
        return Err(Error::OperationExceedsCapacity {
            did_suffix: front_operation.did_suffix.clone(),
            operation_size: front_operation.operation_buffer.len(),
            max_batch_size_bytes: protocol.max_batch_size_bytes,
        });
    }

    let mut batch_v = Vec::new();
    let mut cumulative_size = 0usize;
    for queued_operation in candidate_v {
        cumulative_size += queued_operation.operation_buffer.len();
        if cumulative_size > protocol.max_batch_size_bytes {
            break;
        }
        batch_v.push(queued_operation);
    }
    Ok(batch_v)
}
