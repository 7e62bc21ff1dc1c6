use crate::{Error, Result};

/// Public key in JWK form.  This is the reveal value of the commitment scheme: committing to a
/// key means hashing the JCS serialization of this structure, and revealing means disclosing it.
///
/// Only the key-defining members are modeled (kty, crv, x, y); JWKs that feed hashes must not
/// carry extraneous members, since two semantically equal keys must canonicalize to identical
/// bytes.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct PublicKeyJwk {
    pub kty: String,
    pub crv: String,
    pub x: String,
    #[serde(rename = "y")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_o: Option<String>,
}

impl PublicKeyJwk {
    /// The canonical (JCS) byte encoding of this key.  This is the commitment pre-image.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json_canonicalizer::to_vec(self)
            .map_err(|_| Error::InvalidKey("public key JWK cannot be canonically encoded".into()))?)
    }
    /// Interprets this JWK as an Ed25519 verifying key.
    pub fn ed25519_verifying_key(&self) -> Result<ed25519_dalek::VerifyingKey> {
        if self.kty != "OKP" || self.crv != "Ed25519" {
            return Err(Error::InvalidKey(
                format!(
                    "expected OKP/Ed25519 JWK for signature verification, got {}/{}",
                    self.kty, self.crv
                )
                .into(),
            ));
        }
        let x_byte_v = crate::decode_base64url(self.x.as_str())
            .map_err(|_| Error::InvalidKey("JWK \"x\" member is not valid base64url".into()))?;
        let x_byte_a: [u8; 32] = x_byte_v
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidKey("JWK \"x\" member is not 32 bytes".into()))?;
        Ok(ed25519_dalek::VerifyingKey::from_bytes(&x_byte_a)
            .map_err(|_| Error::InvalidKey("failed to parse Ed25519 public key from bytes".into()))?)
    }
}

impl From<&ed25519_dalek::VerifyingKey> for PublicKeyJwk {
    fn from(verifying_key: &ed25519_dalek::VerifyingKey) -> Self {
        Self {
            kty: "OKP".to_string(),
            crv: "Ed25519".to_string(),
            x: crate::encode_base64url(verifying_key.as_bytes()),
            y_o: None,
        }
    }
}
