mod anchor_string;
mod cas_client;
mod error;
mod ledger_client;
mod operation_storage;

pub use crate::{
    anchor_string::AnchorString,
    cas_client::CasClient,
    error::Error,
    ledger_client::{LedgerClient, TransactionReference},
    operation_storage::OperationStorage,
};

pub type Result<T> = std::result::Result<T, Error>;
