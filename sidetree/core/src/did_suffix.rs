use crate::{Error, Result};

/// The identifier-local portion of a DID: the encoded multihash of the create operation's
/// canonical suffix data.  Validated on construction to be non-empty base64url.
#[derive(
    Clone,
    Debug,
    derive_more::Deref,
    derive_more::Display,
    Eq,
    Hash,
    derive_more::Into,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "String")]
pub struct DIDSuffix(String);

impl DIDSuffix {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for DIDSuffix {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::Malformed("did suffix is empty".into()));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::Malformed(
                "did suffix contains characters outside the base64url alphabet".into(),
            ));
        }
        Ok(Self(s))
    }
}

impl TryFrom<&str> for DIDSuffix {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        Self::try_from(s.to_string())
    }
}
