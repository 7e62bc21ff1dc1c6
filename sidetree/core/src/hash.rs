use base64::Engine;
use sha2::Digest;

use crate::{Error, Result};

/// Hash algorithms usable for commitments and suffix derivation.  Every protocol version
/// declares exactly one; all hash-length validation is relative to that declaration.
/// Values serialize as the multihash algorithm name.
#[derive(
    Clone, Copy, Debug, serde::Deserialize, Eq, Ord, PartialEq, PartialOrd, serde::Serialize,
)]
pub enum HashAlgorithm {
    #[serde(rename = "sha2-256")]
    Sha2_256,
}

impl HashAlgorithm {
    /// The multihash code prefix for this algorithm.
    pub fn multihash_code(&self) -> u8 {
        match self {
            Self::Sha2_256 => 0x12,
        }
    }
    /// The digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha2_256 => 32,
        }
    }
    /// Computes the multihash-framed digest of the given bytes: code byte, length byte, digest.
    pub fn multihash(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha2_256 => {
                let digest = sha2::Sha256::digest(data);
                let mut multihash = Vec::with_capacity(2 + digest.len());
                multihash.push(self.multihash_code());
                multihash.push(digest.len() as u8);
                multihash.extend_from_slice(&digest);
                multihash
            }
        }
    }
    /// Computes the multihash of the given bytes and encodes it as base64url (no padding).
    /// This is the encoding used for commitments, delta hashes, and unique suffixes.
    pub fn encoded_multihash(&self, data: &[u8]) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.multihash(data))
    }
    /// Checks that `encoded` is a well-formed base64url multihash produced by this algorithm.
    /// Hash strings embedded in operations must pass this before the operation is admitted.
    pub fn validate_encoded_multihash(&self, encoded: &str) -> Result<()> {
        let multihash = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| {
                Error::Validation("hash value is not valid base64url".into())
            })?;
        if multihash.len() != 2 + self.digest_len() {
            return Err(Error::Validation(
                format!(
                    "hash value has multihash length {}, expected {}",
                    multihash.len(),
                    2 + self.digest_len()
                )
                .into(),
            ));
        }
        if multihash[0] != self.multihash_code() {
            return Err(Error::Validation(
                format!(
                    "hash value has multihash code {}, expected {}",
                    multihash[0],
                    self.multihash_code()
                )
                .into(),
            ));
        }
        if multihash[1] as usize != self.digest_len() {
            return Err(Error::Validation(
                "hash value declares a digest length inconsistent with its multihash code".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sha2_256 => write!(f, "sha2-256"),
        }
    }
}

/// Encodes arbitrary bytes as base64url without padding.
pub fn encode_base64url(data: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(data)
}

/// Decodes base64url (no padding) bytes.
pub fn decode_base64url(encoded: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| Error::Malformed("invalid base64url encoding".into()))
}
