use std::borrow::Cow;

use sidetree_core::DIDSuffix;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Operation for {did_suffix} ({operation_size} bytes) exceeds the max batch size ({max_batch_size_bytes} bytes) and can never be anchored"
    )]
    OperationExceedsCapacity {
        did_suffix: DIDSuffix,
        operation_size: usize,
        max_batch_size_bytes: usize,
    },
    #[error("Serialization error: {0}")]
    Serialization(Cow<'static, str>),
    #[error(transparent)]
    Core(#[from] sidetree_core::Error),
    #[error(transparent)]
    Store(#[from] sidetree_op_store::Error),
}
