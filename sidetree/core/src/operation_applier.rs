use crate::{
    apply_patches, calculate_commitment, Commitment, Delta, Document, Error, Operation,
    OperationRequest, ProtocolParameters, PublicKeyJwk, ResolutionModel, Result,
};

/// Applies one candidate operation to the resolution state, advancing the
/// `Unpublished -> Published -> Deactivated` state machine, or rejects it.
///
/// A rejection concerns only the offending operation: the caller continues with the next
/// candidate.  On rejection `model` is unchanged (all mutation happens after every guard has
/// passed, and patch application works on a scratch copy).
pub fn apply_operation(
    model: &mut ResolutionModel,
    operation: &Operation,
    protocol: &ProtocolParameters,
) -> Result<()> {
    if model.deactivated {
        return Err(Error::AfterDeactivate);
    }
    match (&operation.request, model.published) {
        (OperationRequest::Create { suffix_data, delta }, false) => {
            // Guard: the embedded delta must be the one committed to by the suffix data.
            let delta_hash = delta.hash(protocol.multihash_algorithm)?;
            if delta_hash != suffix_data.delta_hash {
                return Err(Error::Validation(
                    "create delta does not match the suffix data delta hash".into(),
                ));
            }
            let document = apply_patches(&Document::new(), delta.patch_v.as_slice())?;
            model.document = document;
            model.update_commitment_o = Some(Commitment {
                value: delta.update_commitment.clone(),
                algorithm: protocol.multihash_algorithm,
            });
            model.recovery_commitment_o = Some(Commitment {
                value: suffix_data.recovery_commitment.clone(),
                algorithm: protocol.multihash_algorithm,
            });
            model.published = true;
            Ok(())
        }
        (OperationRequest::Create { .. }, true) => Err(Error::Validation(
            "create operation for an already-published identifier".into(),
        )),
        (OperationRequest::Update { update_key, delta, .. }, true) => {
            let revealed_value = verify_chain_reveal(
                update_key,
                model.update_commitment_o.as_ref(),
                &model.consumed_update_commitment_s,
                "update",
            )?;
            if delta.update_commitment == revealed_value {
                return Err(Error::Validation(
                    "new update commitment must differ from the commitment being revealed".into(),
                ));
            }
            let document = apply_patches(&model.document, delta.patch_v.as_slice())?;
            model.document = document;
            model.consumed_update_commitment_s.insert(revealed_value);
            model.update_commitment_o = Some(Commitment {
                value: delta.update_commitment.clone(),
                algorithm: protocol.multihash_algorithm,
            });
            Ok(())
        }
        (
            OperationRequest::Recover {
                recovery_key,
                delta,
                signed_data,
                ..
            },
            true,
        ) => {
            let revealed_value = verify_chain_reveal(
                recovery_key,
                model.recovery_commitment_o.as_ref(),
                &model.consumed_recovery_commitment_s,
                "recovery",
            )?;
            signed_data.verify(recovery_key)?;
            verify_signed_delta_hash(delta, signed_data.delta_hash.as_str(), protocol)?;
            if signed_data.recovery_commitment == revealed_value {
                return Err(Error::Validation(
                    "new recovery commitment must differ from the commitment being revealed"
                        .into(),
                ));
            }
            // The chain restarts: the document is rebuilt from scratch and both commitments
            // are replaced, implicitly invalidating anything still chained from the old ones.
            let document = apply_patches(&Document::new(), delta.patch_v.as_slice())?;
            model.document = document;
            model.consumed_recovery_commitment_s.insert(revealed_value);
            model.update_commitment_o = Some(Commitment {
                value: delta.update_commitment.clone(),
                algorithm: protocol.multihash_algorithm,
            });
            model.recovery_commitment_o = Some(Commitment {
                value: signed_data.recovery_commitment.clone(),
                algorithm: protocol.multihash_algorithm,
            });
            Ok(())
        }
        (
            OperationRequest::Deactivate {
                recovery_key,
                signed_data,
                did_suffix,
            },
            true,
        ) => {
            let revealed_value = verify_chain_reveal(
                recovery_key,
                model.recovery_commitment_o.as_ref(),
                &model.consumed_recovery_commitment_s,
                "recovery",
            )?;
            signed_data.verify(recovery_key)?;
            if signed_data.did_suffix != did_suffix.as_str() {
                return Err(Error::Authorization(
                    "deactivate signed data did suffix does not match operation did suffix".into(),
                ));
            }
            model.document = Document::new();
            model.consumed_recovery_commitment_s.insert(revealed_value);
            model.update_commitment_o = None;
            model.recovery_commitment_o = None;
            model.deactivated = true;
            Ok(())
        }
        (_, false) => Err(Error::Validation(
            "operation received for an unpublished identifier".into(),
        )),
    }
}

/// Verifies that `revealed_key` is the pre-image of the chain's current commitment and that
/// the commitment has not been consumed before.  Returns the commitment value being consumed.
///
/// The reveal is hashed under the algorithm pinned into the current commitment at its creation
/// time, not the algorithm active now.
fn verify_chain_reveal(
    revealed_key: &PublicKeyJwk,
    current_commitment_o: Option<&Commitment>,
    consumed_commitment_s: &std::collections::HashSet<String>,
    chain: &'static str,
) -> Result<String> {
    let current_commitment = current_commitment_o.ok_or_else(|| {
        Error::Authorization("identifier has no live commitment for this chain".into())
    })?;
    let revealed_commitment =
        calculate_commitment(revealed_key, current_commitment.algorithm)?;
    if revealed_commitment.value != current_commitment.value {
        return Err(Error::Authorization(
            format!("revealed key does not match the current {} commitment", chain).into(),
        ));
    }
    if consumed_commitment_s.contains(&revealed_commitment.value) {
        return Err(Error::Authorization(
            format!("{} commitment has already been revealed and consumed", chain).into(),
        ));
    }
    Ok(revealed_commitment.value)
}

fn verify_signed_delta_hash(
    delta: &Delta,
    signed_delta_hash: &str,
    protocol: &ProtocolParameters,
) -> Result<()> {
    let delta_hash = delta.hash(protocol.multihash_algorithm)?;
    if delta_hash != signed_delta_hash {
        return Err(Error::Validation(
            "recover delta does not match the signed delta hash".into(),
        ));
    }
    Ok(())
}
