use std::collections::{BTreeMap, BTreeSet};

use crate::{Error, HashAlgorithm, PatchAction, Result};

/// The immutable protocol parameter bundle in effect from `genesis_time` onward.  Size limits,
/// hash algorithm choice, and the supported-patch allow-list all flow from here, never from
/// compile-time constants, so one binary can replay history spanning protocol upgrades.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct ProtocolParameters {
    /// Anchor time at which this version activates.
    #[serde(rename = "genesisTime")]
    pub genesis_time: u64,
    #[serde(rename = "multihashAlgorithm")]
    pub multihash_algorithm: HashAlgorithm,
    /// Maximum encoded operation size in bytes.
    #[serde(rename = "maxOperationSize")]
    pub max_operation_size: usize,
    #[serde(rename = "maxOperationsPerBatch")]
    pub max_operations_per_batch: usize,
    /// Maximum cumulative encoded size of a batch in bytes.
    #[serde(rename = "maxBatchSizeBytes")]
    pub max_batch_size_bytes: usize,
    #[serde(rename = "supportedPatchActions")]
    pub supported_patch_action_v: BTreeSet<PatchAction>,
}

impl ProtocolParameters {
    pub fn supports_patch_action(&self, patch_action: PatchAction) -> bool {
        self.supported_patch_action_v.contains(&patch_action)
    }
}

/// The time-ordered table of protocol versions.  Lookup returns the version whose activation
/// threshold is the greatest value less than or equal to the given anchor time.
#[derive(Clone, Debug)]
pub struct ProtocolVersioning {
    version_m: BTreeMap<u64, ProtocolParameters>,
}

impl ProtocolVersioning {
    pub fn new(version_v: Vec<ProtocolParameters>) -> Result<Self> {
        let mut version_m = BTreeMap::new();
        for version in version_v {
            if version_m.insert(version.genesis_time, version).is_some() {
                return Err(Error::Malformed(
                    "protocol version table contains duplicate genesis times".into(),
                ));
            }
        }
        Ok(Self { version_m })
    }
    /// The protocol version in effect at the given anchor time.
    pub fn current(&self, anchor_time: u64) -> Result<&ProtocolParameters> {
        self.version_m
            .range(..=anchor_time)
            .last()
            .map(|(_, version)| version)
            .ok_or(Error::NoProtocolVersion(anchor_time))
    }
    /// The newest protocol version.  New batches are always cut under this version; `current`
    /// exists for replaying history.
    pub fn latest(&self) -> Result<&ProtocolParameters> {
        self.version_m
            .values()
            .last()
            .ok_or_else(|| Error::Malformed("protocol version table is empty".into()))
    }
}
