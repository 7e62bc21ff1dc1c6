use crate::{DIDSuffix, Error, HashAlgorithm, Result};

/// The create operation's identifier-defining payload: the hash of the initial delta and the
/// initial recovery commitment.  The unique suffix of the DID is the encoded multihash of this
/// structure's canonical bytes, so two bit-identical create payloads always derive the same
/// identifier.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct SuffixData {
    #[serde(rename = "deltaHash")]
    pub delta_hash: String,
    #[serde(rename = "recoveryCommitment")]
    pub recovery_commitment: String,
}

impl SuffixData {
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json_canonicalizer::to_vec(self).map_err(|_| {
            Error::Malformed("failed to serialize suffix data to canonical JSON".into())
        })?)
    }
    pub fn derive_did_suffix(&self, algorithm: HashAlgorithm) -> Result<DIDSuffix> {
        let encoded_multihash = algorithm.encoded_multihash(self.canonical_bytes()?.as_slice());
        DIDSuffix::try_from(encoded_multihash)
    }
}
