use std::sync::Arc;

use sidetree_batcher::OperationQueue;
use sidetree_core::{
    apply_operation, parse_operation, resolve, short_form_did, Delta, Operation, OperationType,
    ParsedDID, ProtocolVersioning, ResolutionModel, SuffixData,
};
use sidetree_op_store::OperationStorage;

use crate::{Error, ResolutionResult, Result};

/// Top-level façade over the operation engine.
///
/// Writes: external operation requests are parsed and validated under the protocol version in
/// effect, then enqueued for the batch writer.  Only a create returns a document (early,
/// optimistic, unanchored); the effect of update/recover/deactivate is observable only after
/// anchoring and resolution.
///
/// Reads: identifiers are resolved against the anchored operation store.  Long-form
/// identifiers that are not anchored yet resolve entirely in memory from the embedded
/// initial state.
pub struct DocumentHandler<Storage: OperationStorage> {
    namespace: String,
    alias_v: Vec<String>,
    versioning: Arc<ProtocolVersioning>,
    operation_storage: Storage,
    queue: Arc<OperationQueue>,
}

/// The long-form initial state payload: the create operation's delta and suffix data.
#[derive(serde::Deserialize, serde::Serialize)]
struct InitialState {
    #[serde(rename = "suffixData")]
    suffix_data: SuffixData,
    delta: Delta,
}

impl<Storage: OperationStorage> DocumentHandler<Storage> {
    pub fn new(
        namespace: String,
        alias_v: Vec<String>,
        versioning: Arc<ProtocolVersioning>,
        operation_storage: Storage,
        queue: Arc<OperationQueue>,
    ) -> Self {
        Self {
            namespace,
            alias_v,
            versioning,
            operation_storage,
            queue,
        }
    }
    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    /// Admits one external operation request.  Returns the optimistic (unpublished)
    /// resolution result for a create, and nothing for the other operation types.
    ///
    /// Validation failures reject the request before anything is queued.
    pub async fn process_operation(
        &self,
        operation_buffer: &[u8],
        anchor_time_hint: u64,
    ) -> Result<Option<ResolutionResult>> {
        let protocol = self.versioning.current(anchor_time_hint)?;
        let operation = parse_operation(operation_buffer, protocol)?;

        // For a create, replay the operation against a fresh state before admitting it, both
        // to reject invalid creates synchronously and to produce the optimistic result.
        let resolution_result_o = if operation.operation_type() == OperationType::Create {
            let mut model = ResolutionModel::new();
            apply_operation(&mut model, &operation, protocol)?;
            let did = short_form_did(self.namespace.as_str(), &operation.did_suffix);
            Some(ResolutionResult::new(
                did.as_str(),
                did.as_str(),
                &model,
                false,
            ))
        } else {
            None
        };

        tracing::debug!(
            "admitting {} operation for suffix {}",
            operation.operation_type(),
            operation.did_suffix
        );
        self.queue
            .add(operation.did_suffix.clone(), operation.operation_buffer);
        Ok(resolution_result_o)
    }

    /// Resolves an identifier to its externally visible resolution result.  Supports the
    /// short form (anchored operations only) and the long form (falls back to the embedded
    /// initial state when nothing is anchored yet).
    pub async fn resolve_document(&self, did: &str) -> Result<ResolutionResult> {
        let parsed_did = ParsedDID::parse(did, self.namespace.as_str(), self.alias_v.as_slice())?;
        tracing::trace!(
            "resolving did suffix {} (namespace {})",
            parsed_did.did_suffix,
            parsed_did.namespace
        );

        let anchored_operation_v = self
            .operation_storage
            .get_operations(&parsed_did.did_suffix)
            .await?;
        if !anchored_operation_v.is_empty() {
            match resolve(
                &parsed_did.did_suffix,
                anchored_operation_v,
                self.versioning.as_ref(),
            ) {
                Ok(model) => {
                    let canonical_did =
                        short_form_did(self.namespace.as_str(), &parsed_did.did_suffix);
                    // The requested form (alias or long form) is preserved as the document id.
                    let requested_did = if parsed_did.is_long_form() {
                        did.to_string()
                    } else {
                        parsed_did.short_form()
                    };
                    return Ok(ResolutionResult::new(
                        requested_did.as_str(),
                        canonical_did.as_str(),
                        &model,
                        true,
                    ));
                }
                // A long-form identifier still resolves from its embedded initial state when
                // nothing valid is anchored.
                Err(sidetree_core::Error::NotFound(_)) if parsed_did.is_long_form() => {}
                Err(err) => return Err(err.into()),
            }
        }

        match parsed_did.initial_state_o.as_deref() {
            Some(initial_state) => self.resolve_unanchored(did, &parsed_did, initial_state),
            None => Err(Error::NotFound(
                "no anchored operations found for the did suffix",
            )),
        }
    }

    /// Long-form resolution: reconstructs the create operation from the encoded initial state
    /// and resolves entirely in memory.  This is how identifiers are usable before anchoring.
    fn resolve_unanchored(
        &self,
        requested_did: &str,
        parsed_did: &ParsedDID,
        initial_state: &str,
    ) -> Result<ResolutionResult> {
        let operation = self.reconstruct_create_operation(initial_state)?;
        if operation.did_suffix != parsed_did.did_suffix {
            return Err(Error::FailedConstraint(
                "provided did does not match the did created from its initial state".into(),
            ));
        }
        let protocol = self.versioning.latest()?;
        let mut model = ResolutionModel::new();
        apply_operation(&mut model, &operation, protocol)?;
        let canonical_did = short_form_did(self.namespace.as_str(), &parsed_did.did_suffix);
        Ok(ResolutionResult::new(
            requested_did,
            canonical_did.as_str(),
            &model,
            false,
        ))
    }

    fn reconstruct_create_operation(&self, initial_state: &str) -> Result<Operation> {
        let initial_state_byte_v = sidetree_core::decode_base64url(initial_state)
            .map_err(|_| Error::BadRequest("long-form initial state is not valid base64url".into()))?;
        let initial_state: InitialState = serde_json::from_slice(initial_state_byte_v.as_slice())
            .map_err(|err| {
                Error::BadRequest(format!("malformed long-form initial state: {}", err).into())
            })?;
        let create_request = serde_json::json!({
            "type": "create",
            "suffixData": initial_state.suffix_data,
            "delta": initial_state.delta,
        });
        let operation_buffer = serde_json_canonicalizer::to_vec(&create_request).map_err(|_| {
            Error::BadRequest("failed to canonicalize reconstructed create operation".into())
        })?;
        // The reconstructed operation goes through the regular parser so the same size and
        // validity limits apply to long-form resolution as to admission.
        let protocol = self.versioning.latest()?;
        Ok(parse_operation(operation_buffer.as_slice(), protocol)?)
    }
}
