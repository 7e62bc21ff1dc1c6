use crate::{AnchorString, Result};

/// The anchoring position assigned by the ledger: the total-order timestamp used as the
/// canonical replay order for resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TransactionReference {
    #[serde(rename = "transactionTime")]
    pub transaction_time: u64,
    #[serde(rename = "transactionNumber")]
    pub transaction_number: u64,
}

/// Anchoring/ledger collaborator.  Append-only; a successful write places the anchor at a
/// unique, totally ordered position.
#[async_trait::async_trait]
pub trait LedgerClient: Send + Sync {
    async fn write_anchor(&self, anchor_string: &AnchorString) -> Result<TransactionReference>;
}
