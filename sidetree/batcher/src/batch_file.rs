use sidetree_core::{decode_base64url, encode_base64url};

use crate::{Error, QueuedOperation, Result};

/// The batch payload persisted to CAS: the encoded operation buffers of one cut, in queue
/// order.  Serialized canonically (JCS) so that re-writing the same batch always produces the
/// same content address.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct BatchFile {
    #[serde(rename = "operations")]
    pub operation_v: Vec<String>,
}

impl BatchFile {
    pub fn from_queued_operations(queued_operation_v: &[QueuedOperation]) -> Self {
        Self {
            operation_v: queued_operation_v
                .iter()
                .map(|queued_operation| {
                    encode_base64url(queued_operation.operation_buffer.as_slice())
                })
                .collect(),
        }
    }
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json_canonicalizer::to_vec(self).map_err(|_| {
            Error::Serialization("failed to serialize batch file to canonical JSON".into())
        })?)
    }
    pub fn from_bytes(content: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(content)
            .map_err(|err| Error::Serialization(format!("malformed batch file: {}", err).into()))?)
    }
    /// Decodes the raw operation buffers carried by this batch file.
    pub fn operation_buffers(&self) -> Result<Vec<Vec<u8>>> {
        self.operation_v
            .iter()
            .map(|encoded| Ok(decode_base64url(encoded.as_str())?))
            .collect()
    }
}
