use crate::{DIDSuffix, Operation};

/// An operation together with its anchoring metadata.  Created once the operation has been
/// included in an anchored batch; immutable thereafter.  (transaction_time, transaction_number)
/// establishes the canonical total order across all operations of an identifier; the raw
/// operation bytes break the (by construction unreachable) tie deterministically.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct AnchoredOperation {
    #[serde(rename = "didSuffix")]
    pub did_suffix: DIDSuffix,
    #[serde(rename = "operationBuffer", with = "serde_operation_buffer")]
    pub operation_buffer: Vec<u8>,
    #[serde(rename = "transactionTime")]
    pub transaction_time: u64,
    #[serde(rename = "transactionNumber")]
    pub transaction_number: u64,
}

impl AnchoredOperation {
    pub fn new(operation: &Operation, transaction_time: u64, transaction_number: u64) -> Self {
        Self {
            did_suffix: operation.did_suffix.clone(),
            operation_buffer: operation.operation_buffer.clone(),
            transaction_time,
            transaction_number,
        }
    }
    /// The key operations are sorted by to obtain the canonical replay order.
    pub fn canonical_order_key(&self) -> (u64, u64, &[u8]) {
        (
            self.transaction_time,
            self.transaction_number,
            self.operation_buffer.as_slice(),
        )
    }
}

/// Operation buffers travel as base64url (no padding) on the wire and in stores.
mod serde_operation_buffer {
    pub fn serialize<S: serde::Serializer>(
        operation_buffer: &[u8],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(crate::encode_base64url(operation_buffer).as_str())
    }
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<u8>, D::Error> {
        let encoded = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::decode_base64url(encoded.as_str()).map_err(serde::de::Error::custom)
    }
}
