use crate::{Error, HashAlgorithm, Patch, Result};

/// The mutation payload of a create/update/recover operation: the ordered patch list plus the
/// commitment that will authorize the *next* update.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct Delta {
    #[serde(rename = "patches")]
    pub patch_v: Vec<Patch>,
    #[serde(rename = "updateCommitment")]
    pub update_commitment: String,
}

impl Delta {
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json_canonicalizer::to_vec(self)
            .map_err(|_| Error::Malformed("failed to serialize delta to canonical JSON".into()))?)
    }
    /// The encoded multihash of this delta's canonical bytes, as embedded in suffix data and
    /// recover signed data.
    pub fn hash(&self, algorithm: HashAlgorithm) -> Result<String> {
        Ok(algorithm.encoded_multihash(self.canonical_bytes()?.as_slice()))
    }
}
