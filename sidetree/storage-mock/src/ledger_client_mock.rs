use std::sync::{Arc, RwLock};

use sidetree_op_store::{AnchorString, Error, Result, TransactionReference};

struct LedgerClientMockState {
    anchor_v: Vec<(AnchorString, TransactionReference)>,
    next_transaction_time: u64,
    fail_writes: bool,
}

/// In-memory anchoring ledger for tests.  Every accepted anchor is assigned a strictly
/// increasing transaction time, and its transaction number is its position in the ledger.
/// Writes can be switched to fail to exercise the batch writer's retry path.
#[derive(Clone)]
pub struct LedgerClientMock {
    state_la: Arc<RwLock<LedgerClientMockState>>,
}

impl LedgerClientMock {
    pub fn new(genesis_transaction_time: u64) -> Self {
        Self {
            state_la: Arc::new(RwLock::new(LedgerClientMockState {
                anchor_v: Vec::new(),
                next_transaction_time: genesis_transaction_time,
                fail_writes: false,
            })),
        }
    }
    pub fn set_fail_writes(&self, fail_writes: bool) {
        self.state_la.write().unwrap().fail_writes = fail_writes;
    }
    pub fn anchors(&self) -> Vec<(AnchorString, TransactionReference)> {
        self.state_la.read().unwrap().anchor_v.clone()
    }
}

#[async_trait::async_trait]
impl sidetree_op_store::LedgerClient for LedgerClientMock {
    async fn write_anchor(&self, anchor_string: &AnchorString) -> Result<TransactionReference> {
        let mut state_g = self.state_la.write().unwrap();
        if state_g.fail_writes {
            return Err(Error::Anchoring("injected ledger write failure".into()));
        }
        let transaction_reference = TransactionReference {
            transaction_time: state_g.next_transaction_time,
            transaction_number: state_g.anchor_v.len() as u64,
        };
        state_g.next_transaction_time += 1;
        state_g
            .anchor_v
            .push((anchor_string.clone(), transaction_reference));
        Ok(transaction_reference)
    }
}
