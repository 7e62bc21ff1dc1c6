use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use sidetree_core::HashAlgorithm;
use sidetree_op_store::{Error, Result};

#[derive(Default)]
struct CasClientMockState {
    content_m: HashMap<String, Vec<u8>>,
    write_count: usize,
}

/// In-memory content-addressable storage for tests.  Addresses are the encoded multihash of
/// the content, so writes are idempotent by construction.
#[derive(Clone)]
pub struct CasClientMock {
    algorithm: HashAlgorithm,
    state_la: Arc<RwLock<CasClientMockState>>,
}

impl CasClientMock {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            state_la: Arc::new(RwLock::new(CasClientMockState::default())),
        }
    }
    /// Total number of write calls, including writes of already-present content.
    pub fn write_count(&self) -> usize {
        self.state_la.read().unwrap().write_count
    }
}

#[async_trait::async_trait]
impl sidetree_op_store::CasClient for CasClientMock {
    async fn write(&self, content: &[u8]) -> Result<String> {
        let address = self.algorithm.encoded_multihash(content);
        let mut state_g = self.state_la.write().unwrap();
        state_g.write_count += 1;
        state_g.content_m.insert(address.clone(), content.to_vec());
        Ok(address)
    }
    async fn read(&self, address: &str) -> Result<Vec<u8>> {
        let state_g = self.state_la.read().unwrap();
        state_g
            .content_m
            .get(address)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no content at CAS address {}", address).into()))
    }
}
