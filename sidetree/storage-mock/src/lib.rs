mod cas_client_mock;
mod ledger_client_mock;
mod operation_storage_mock;

pub use crate::{
    cas_client_mock::CasClientMock, ledger_client_mock::LedgerClientMock,
    operation_storage_mock::OperationStorageMock,
};
