use crate::{Delta, DIDSuffix, Error, Operation, OperationRequest, ProtocolParameters, Result};

/// Decodes raw operation bytes into a typed, validated [`Operation`] under the given protocol
/// version.  No partial or best-effort parse is ever returned: any violation yields a
/// descriptive validation error and the operation must not be admitted.
pub fn parse_operation(
    operation_buffer: &[u8],
    protocol: &ProtocolParameters,
) -> Result<Operation> {
    if operation_buffer.len() > protocol.max_operation_size {
        return Err(Error::Validation(
            format!(
                "operation byte size {} exceeds protocol max operation byte size {}",
                operation_buffer.len(),
                protocol.max_operation_size
            )
            .into(),
        ));
    }
    let request: OperationRequest = serde_json::from_slice(operation_buffer)
        .map_err(|err| Error::Validation(format!("malformed operation request: {}", err).into()))?;

    if let Some(delta) = request.delta_o() {
        validate_delta(delta, protocol)?;
    }

    let did_suffix = match &request {
        OperationRequest::Create { suffix_data, .. } => {
            protocol
                .multihash_algorithm
                .validate_encoded_multihash(suffix_data.delta_hash.as_str())?;
            protocol
                .multihash_algorithm
                .validate_encoded_multihash(suffix_data.recovery_commitment.as_str())?;
            suffix_data.derive_did_suffix(protocol.multihash_algorithm)?
        }
        OperationRequest::Update { did_suffix, .. } => {
            validate_did_suffix(did_suffix, protocol)?;
            did_suffix.clone()
        }
        OperationRequest::Recover {
            did_suffix,
            signed_data,
            ..
        } => {
            validate_did_suffix(did_suffix, protocol)?;
            protocol
                .multihash_algorithm
                .validate_encoded_multihash(signed_data.delta_hash.as_str())?;
            protocol
                .multihash_algorithm
                .validate_encoded_multihash(signed_data.recovery_commitment.as_str())?;
            did_suffix.clone()
        }
        OperationRequest::Deactivate {
            did_suffix,
            signed_data,
            ..
        } => {
            validate_did_suffix(did_suffix, protocol)?;
            if signed_data.did_suffix != did_suffix.as_str() {
                return Err(Error::Validation(
                    "deactivate signed data did suffix does not match operation did suffix".into(),
                ));
            }
            did_suffix.clone()
        }
    };

    Ok(Operation {
        did_suffix,
        operation_buffer: operation_buffer.to_vec(),
        request,
    })
}

/// A did suffix is itself an encoded multihash (of the create suffix data), so its shape is
/// validated against the active version's hash algorithm like any other hash string.
fn validate_did_suffix(did_suffix: &DIDSuffix, protocol: &ProtocolParameters) -> Result<()> {
    protocol
        .multihash_algorithm
        .validate_encoded_multihash(did_suffix.as_str())
        .map_err(|_| Error::Validation("did suffix is not a well-formed encoded multihash".into()))
}

fn validate_delta(delta: &Delta, protocol: &ProtocolParameters) -> Result<()> {
    for patch in delta.patch_v.iter() {
        if !protocol.supports_patch_action(patch.action()) {
            return Err(Error::Validation(
                format!(
                    "patch action {} is not supported by the active protocol version",
                    patch.action()
                )
                .into(),
            ));
        }
    }
    protocol
        .multihash_algorithm
        .validate_encoded_multihash(delta.update_commitment.as_str())
}
