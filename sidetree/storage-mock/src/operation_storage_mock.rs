use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use sidetree_core::{AnchoredOperation, DIDSuffix};
use sidetree_op_store::Result;

#[derive(Default)]
struct OperationStorageMockState {
    /// This is what actually stores the anchored operations, keyed by unique suffix.
    operation_m: HashMap<DIDSuffix, Vec<AnchoredOperation>>,
}

impl OperationStorageMockState {
    fn put(&mut self, anchored_operation: &AnchoredOperation) {
        let operation_v = self
            .operation_m
            .entry(anchored_operation.did_suffix.clone())
            .or_default();
        // Putting the same anchored operation twice is harmless; keep the store minimal.
        if !operation_v.contains(anchored_operation) {
            operation_v.push(anchored_operation.clone());
        }
    }
    fn get(&self, did_suffix: &DIDSuffix) -> Vec<AnchoredOperation> {
        self.operation_m
            .get(did_suffix)
            .cloned()
            .unwrap_or_default()
    }
}

/// In-memory operation store for tests.
#[derive(Clone, Default)]
pub struct OperationStorageMock {
    state_la: Arc<RwLock<OperationStorageMockState>>,
}

impl OperationStorageMock {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl sidetree_op_store::OperationStorage for OperationStorageMock {
    async fn put_operations(&self, anchored_operation_v: &[AnchoredOperation]) -> Result<()> {
        let mut state_g = self.state_la.write().unwrap();
        for anchored_operation in anchored_operation_v {
            state_g.put(anchored_operation);
        }
        Ok(())
    }
    async fn get_operations(&self, did_suffix: &DIDSuffix) -> Result<Vec<AnchoredOperation>> {
        let state_g = self.state_la.read().unwrap();
        Ok(state_g.get(did_suffix))
    }
}
