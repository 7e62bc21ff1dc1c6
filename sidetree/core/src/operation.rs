use crate::{
    DeactivateSignedData, Delta, DIDSuffix, PublicKeyJwk, RecoverSignedData, SuffixData,
};

#[derive(Clone, Copy, Debug, serde::Deserialize, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Create,
    Update,
    Recover,
    Deactivate,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Recover => "recover",
            Self::Deactivate => "deactivate",
        };
        write!(f, "{}", s)
    }
}

/// The wire model of an operation request, tagged by its "type" member.  The reveal value of
/// update/recover/deactivate is the disclosed key itself (`updateKey`/`recoveryKey`): it is the
/// pre-image of the commitment recorded by the previous operation in the same chain.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperationRequest {
    Create {
        #[serde(rename = "suffixData")]
        suffix_data: SuffixData,
        delta: Delta,
    },
    Update {
        #[serde(rename = "didSuffix")]
        did_suffix: DIDSuffix,
        #[serde(rename = "updateKey")]
        update_key: PublicKeyJwk,
        delta: Delta,
    },
    Recover {
        #[serde(rename = "didSuffix")]
        did_suffix: DIDSuffix,
        #[serde(rename = "recoveryKey")]
        recovery_key: PublicKeyJwk,
        delta: Delta,
        #[serde(rename = "signedData")]
        signed_data: RecoverSignedData,
    },
    Deactivate {
        #[serde(rename = "didSuffix")]
        did_suffix: DIDSuffix,
        #[serde(rename = "recoveryKey")]
        recovery_key: PublicKeyJwk,
        #[serde(rename = "signedData")]
        signed_data: DeactivateSignedData,
    },
}

impl OperationRequest {
    pub fn operation_type(&self) -> OperationType {
        match self {
            Self::Create { .. } => OperationType::Create,
            Self::Update { .. } => OperationType::Update,
            Self::Recover { .. } => OperationType::Recover,
            Self::Deactivate { .. } => OperationType::Deactivate,
        }
    }
    pub fn delta_o(&self) -> Option<&Delta> {
        match self {
            Self::Create { delta, .. }
            | Self::Update { delta, .. }
            | Self::Recover { delta, .. } => Some(delta),
            Self::Deactivate { .. } => None,
        }
    }
}

/// A parsed, validated operation.  `operation_buffer` preserves the raw canonical bytes
/// verbatim; suffix derivation and batch serialization operate on these bytes, never on a
/// re-serialization of the parsed request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operation {
    pub did_suffix: DIDSuffix,
    pub operation_buffer: Vec<u8>,
    pub request: OperationRequest,
}

impl Operation {
    pub fn operation_type(&self) -> OperationType {
        self.request.operation_type()
    }
}
