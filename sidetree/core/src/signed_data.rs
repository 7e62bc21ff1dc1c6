use ed25519_dalek::{Signer, Verifier};

use crate::{decode_base64url, encode_base64url, Error, PublicKeyJwk, Result};

/// Signed payload of a recover operation.  The signature covers the JCS serialization of the
/// payload members (everything except the signature slot itself), signed by the revealed
/// recovery key.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct RecoverSignedData {
    #[serde(rename = "deltaHash")]
    pub delta_hash: String,
    #[serde(rename = "recoveryCommitment")]
    pub recovery_commitment: String,
    pub signature: String,
}

#[derive(serde::Serialize)]
struct RecoverSignedPayload<'a> {
    #[serde(rename = "deltaHash")]
    delta_hash: &'a str,
    #[serde(rename = "recoveryCommitment")]
    recovery_commitment: &'a str,
}

impl RecoverSignedData {
    pub fn new_signed(
        delta_hash: String,
        recovery_commitment: String,
        signing_key: &ed25519_dalek::SigningKey,
    ) -> Result<Self> {
        let signing_input = signed_bytes(&RecoverSignedPayload {
            delta_hash: delta_hash.as_str(),
            recovery_commitment: recovery_commitment.as_str(),
        })?;
        let signature = signing_key.sign(signing_input.as_slice());
        Ok(Self {
            delta_hash,
            recovery_commitment,
            signature: encode_base64url(signature.to_bytes().as_slice()),
        })
    }
    /// Verifies the signature against the given (revealed) recovery key.
    pub fn verify(&self, recovery_key: &PublicKeyJwk) -> Result<()> {
        let signing_input = signed_bytes(&RecoverSignedPayload {
            delta_hash: self.delta_hash.as_str(),
            recovery_commitment: self.recovery_commitment.as_str(),
        })?;
        verify_signature(recovery_key, signing_input.as_slice(), self.signature.as_str())
    }
}

/// Signed payload of a deactivate operation.  Binding the did suffix into the signed payload
/// prevents a deactivation signature from being replayed against another identifier that
/// happens to share the same recovery key.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct DeactivateSignedData {
    #[serde(rename = "didSuffix")]
    pub did_suffix: String,
    pub signature: String,
}

#[derive(serde::Serialize)]
struct DeactivateSignedPayload<'a> {
    #[serde(rename = "didSuffix")]
    did_suffix: &'a str,
}

impl DeactivateSignedData {
    pub fn new_signed(did_suffix: String, signing_key: &ed25519_dalek::SigningKey) -> Result<Self> {
        let signing_input = signed_bytes(&DeactivateSignedPayload {
            did_suffix: did_suffix.as_str(),
        })?;
        let signature = signing_key.sign(signing_input.as_slice());
        Ok(Self {
            did_suffix,
            signature: encode_base64url(signature.to_bytes().as_slice()),
        })
    }
    pub fn verify(&self, recovery_key: &PublicKeyJwk) -> Result<()> {
        let signing_input = signed_bytes(&DeactivateSignedPayload {
            did_suffix: self.did_suffix.as_str(),
        })?;
        verify_signature(recovery_key, signing_input.as_slice(), self.signature.as_str())
    }
}

fn signed_bytes<T: serde::Serialize>(payload: &T) -> Result<Vec<u8>> {
    Ok(serde_json_canonicalizer::to_vec(payload).map_err(|_| {
        Error::Malformed("failed to serialize signed data payload to canonical JSON".into())
    })?)
}

fn verify_signature(
    public_key: &PublicKeyJwk,
    signing_input: &[u8],
    encoded_signature: &str,
) -> Result<()> {
    let verifying_key = public_key.ed25519_verifying_key()?;
    let signature_byte_v = decode_base64url(encoded_signature)
        .map_err(|_| Error::Authorization("signature is not valid base64url".into()))?;
    let signature = ed25519_dalek::Signature::from_slice(signature_byte_v.as_slice())
        .map_err(|_| Error::Authorization("signature has invalid length".into()))?;
    verifying_key
        .verify(signing_input, &signature)
        .map_err(|_| Error::Authorization("signature verification failed".into()))
}
