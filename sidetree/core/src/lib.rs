mod anchored_operation;
mod commitment;
mod delta;
mod did;
mod did_suffix;
mod document;
mod document_composer;
mod error;
mod hash;
mod json_patch;
mod operation;
mod operation_applier;
mod operation_parser;
mod operation_processor;
mod patch;
mod protocol;
mod public_key_jwk;
mod resolution_model;
mod signed_data;
mod suffix_data;

pub use crate::{
    anchored_operation::AnchoredOperation,
    commitment::{calculate_commitment, verify_reveal, Commitment},
    delta::Delta,
    did::{short_form_did, ParsedDID, NAMESPACE_DELIMITER},
    did_suffix::DIDSuffix,
    document::{Document, ID_PROPERTY, PUBLIC_KEYS_PROPERTY, SERVICES_PROPERTY},
    document_composer::apply_patches,
    error::Error,
    hash::{decode_base64url, encode_base64url, HashAlgorithm},
    json_patch::{apply_json_patch, JsonPatchOperation},
    operation::{Operation, OperationRequest, OperationType},
    operation_applier::apply_operation,
    operation_parser::parse_operation,
    operation_processor::resolve,
    patch::{Patch, PatchAction},
    protocol::{ProtocolParameters, ProtocolVersioning},
    public_key_jwk::PublicKeyJwk,
    resolution_model::ResolutionModel,
    signed_data::{DeactivateSignedData, RecoverSignedData},
    suffix_data::SuffixData,
};

pub type Result<T> = std::result::Result<T, Error>;
