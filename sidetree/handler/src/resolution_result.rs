use sidetree_core::ResolutionModel;

/// The resolution result context returned with every resolved document.
pub const DID_RESOLUTION_CONTEXT: &str = "https://w3id.org/did-resolution/v1";

/// The externally visible resolution result: the document plus method and document metadata.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ResolutionResult {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "didDocument")]
    pub did_document: serde_json::Value,
    #[serde(rename = "methodMetadata")]
    pub method_metadata: MethodMetadata,
    #[serde(rename = "didDocumentMetadata")]
    pub did_document_metadata: DocumentMetadata,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct MethodMetadata {
    pub published: bool,
    #[serde(rename = "updateCommitment")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_commitment_o: Option<String>,
    #[serde(rename = "recoveryCommitment")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_commitment_o: Option<String>,
    /// The canonical (namespace) form of the identifier, present when the request used an
    /// alias namespace or the long form.
    #[serde(rename = "canonicalId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_id_o: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub deactivated: bool,
}

impl ResolutionResult {
    /// Assembles the external result from a replayed resolution model.  The resolved
    /// document's "id" property is set to the identifier form the caller actually requested;
    /// `canonical_id` carries the namespace-canonical short form.
    pub fn new(
        requested_did: &str,
        canonical_did: &str,
        model: &ResolutionModel,
        published: bool,
    ) -> Self {
        let mut did_document = model.document.to_value();
        if let serde_json::Value::Object(property_m) = &mut did_document {
            property_m.insert(
                sidetree_core::ID_PROPERTY.to_string(),
                serde_json::Value::String(requested_did.to_string()),
            );
        }
        let canonical_id_o = if requested_did != canonical_did {
            Some(canonical_did.to_string())
        } else {
            None
        };
        Self {
            context: DID_RESOLUTION_CONTEXT.to_string(),
            did_document,
            method_metadata: MethodMetadata {
                published,
                update_commitment_o: model
                    .update_commitment_o
                    .as_ref()
                    .map(|commitment| commitment.value.clone()),
                recovery_commitment_o: model
                    .recovery_commitment_o
                    .as_ref()
                    .map(|commitment| commitment.value.clone()),
                canonical_id_o,
            },
            did_document_metadata: DocumentMetadata {
                deactivated: model.deactivated,
            },
        }
    }
}
