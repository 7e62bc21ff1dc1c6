use crate::{
    apply_operation, parse_operation, AnchoredOperation, DIDSuffix, Error, ProtocolVersioning,
    ResolutionModel, Result,
};

/// Resolves the current state of an identifier by deterministic replay of its anchored
/// operations.
///
/// The store provides the operations in no particular order; they are first sorted into the
/// canonical total order (transaction time, transaction number, raw operation bytes), then
/// replayed through the applier.  A candidate that fails parsing or an applier guard is simply
/// excluded from the final state: only cryptographically authorized operations affect state,
/// and one bad operation never denies resolution for the whole identifier.  A missing protocol
/// version, by contrast, is fatal misconfiguration and aborts the resolve call.
///
/// Given the identical operation set this produces a bit-identical document on every node:
/// no wall clock, no randomness, no map-iteration-order dependence.
pub fn resolve(
    did_suffix: &DIDSuffix,
    mut anchored_operation_v: Vec<AnchoredOperation>,
    versioning: &ProtocolVersioning,
) -> Result<ResolutionModel> {
    anchored_operation_v.sort_by(|a, b| a.canonical_order_key().cmp(&b.canonical_order_key()));

    let mut model = ResolutionModel::new();
    for anchored_operation in anchored_operation_v.iter() {
        if anchored_operation.did_suffix != *did_suffix {
            tracing::debug!(
                "skipping anchored operation for foreign suffix {} while resolving {}",
                anchored_operation.did_suffix,
                did_suffix
            );
            continue;
        }
        // Each operation is parsed and size-checked under the protocol version active at its
        // own anchor time, so history spanning protocol upgrades replays correctly.
        let protocol = versioning.current(anchored_operation.transaction_time)?;
        let operation =
            match parse_operation(anchored_operation.operation_buffer.as_slice(), protocol) {
                Ok(operation) => operation,
                Err(err) => {
                    tracing::debug!(
                        "excluding unparseable operation at transaction time {} number {}: {}",
                        anchored_operation.transaction_time,
                        anchored_operation.transaction_number,
                        err
                    );
                    continue;
                }
            };
        if operation.did_suffix != *did_suffix {
            tracing::debug!(
                "excluding operation whose embedded suffix {} does not match {}",
                operation.did_suffix,
                did_suffix
            );
            continue;
        }
        match apply_operation(&mut model, &operation, protocol) {
            Ok(()) => {
                tracing::trace!(
                    "applied {} operation at transaction time {} number {}",
                    operation.operation_type(),
                    anchored_operation.transaction_time,
                    anchored_operation.transaction_number
                );
            }
            Err(err) => {
                tracing::debug!(
                    "excluding {} operation at transaction time {} number {}: {}",
                    operation.operation_type(),
                    anchored_operation.transaction_time,
                    anchored_operation.transaction_number,
                    err
                );
            }
        }
    }

    if !model.published {
        return Err(Error::NotFound(
            "no valid create operation is anchored for the did suffix",
        ));
    }
    Ok(model)
}
