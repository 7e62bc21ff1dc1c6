use crate::{HashAlgorithm, PublicKeyJwk, Result};

/// A commitment to a future authorization key, together with the hash algorithm it was created
/// under.  The algorithm is pinned at creation time: a reveal is always verified under the
/// algorithm of the protocol version that produced the commitment, never the one active at
/// reveal time.  This prevents hash-downgrade across protocol upgrades.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commitment {
    pub value: String,
    pub algorithm: HashAlgorithm,
}

/// Computes the commitment for a public key: the encoded multihash of the key's canonical
/// byte encoding.
pub fn calculate_commitment(
    public_key: &PublicKeyJwk,
    algorithm: HashAlgorithm,
) -> Result<Commitment> {
    let canonical_byte_v = public_key.canonical_bytes()?;
    Ok(Commitment {
        value: algorithm.encoded_multihash(canonical_byte_v.as_slice()),
        algorithm,
    })
}

/// Recomputes the commitment of the revealed key under the expected commitment's pinned
/// algorithm and compares.  Pure; returns false for keys that cannot be canonically encoded.
pub fn verify_reveal(revealed_key: &PublicKeyJwk, expected_commitment: &Commitment) -> bool {
    match calculate_commitment(revealed_key, expected_commitment.algorithm) {
        Ok(commitment) => commitment.value == expected_commitment.value,
        Err(_) => false,
    }
}
