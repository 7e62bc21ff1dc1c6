use sidetree_core::{AnchoredOperation, DIDSuffix};

use crate::Result;

/// Store of anchored operations, keyed by unique suffix.  Durability and consistency are the
/// implementation's responsibility; the resolution engine only requires that `get_operations`
/// returns every operation previously put for the suffix, in any order.
#[async_trait::async_trait]
pub trait OperationStorage: Send + Sync {
    /// Stores anchored operations.  Storing the same anchored operation twice must be
    /// harmless (resolution tolerates duplicates but stores should not grow unboundedly).
    async fn put_operations(&self, anchored_operation_v: &[AnchoredOperation]) -> Result<()>;
    /// All anchored operations for the given suffix, unordered.  An unknown suffix yields an
    /// empty vector, not an error.
    async fn get_operations(&self, did_suffix: &DIDSuffix) -> Result<Vec<AnchoredOperation>>;
}
