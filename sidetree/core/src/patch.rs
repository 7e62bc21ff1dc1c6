use crate::JsonPatchOperation;

/// The kind of a patch, as named by its wire "action" tag.  Protocol versions carry an
/// allow-list of these; operations using an action outside the active version's list are
/// rejected at parse time.
#[derive(
    Clone, Copy, Debug, serde::Deserialize, Eq, Ord, PartialEq, PartialOrd, serde::Serialize,
)]
pub enum PatchAction {
    #[serde(rename = "add-public-keys")]
    AddPublicKeys,
    #[serde(rename = "remove-public-keys")]
    RemovePublicKeys,
    #[serde(rename = "add-services")]
    AddServices,
    #[serde(rename = "remove-services")]
    RemoveServices,
    #[serde(rename = "ietf-json-patch")]
    IetfJsonPatch,
    #[serde(rename = "replace")]
    Replace,
}

impl PatchAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddPublicKeys => "add-public-keys",
            Self::RemovePublicKeys => "remove-public-keys",
            Self::AddServices => "add-services",
            Self::RemoveServices => "remove-services",
            Self::IetfJsonPatch => "ietf-json-patch",
            Self::Replace => "replace",
        }
    }
}

impl std::fmt::Display for PatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single typed document patch.  Patches apply in the order listed within a delta; later
/// patches see the mutations of earlier ones, and any failure aborts the whole delta.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(tag = "action")]
pub enum Patch {
    /// Upserts public key entries by id: appended if absent, replaced in place if present.
    #[serde(rename = "add-public-keys")]
    AddPublicKeys {
        #[serde(rename = "publicKeys")]
        public_key_v: Vec<serde_json::Value>,
    },
    /// Removes public key entries by id; removing a non-existent id is a no-op.
    #[serde(rename = "remove-public-keys")]
    RemovePublicKeys {
        #[serde(rename = "ids")]
        id_v: Vec<String>,
    },
    #[serde(rename = "add-services")]
    AddServices {
        #[serde(rename = "services")]
        service_v: Vec<serde_json::Value>,
    },
    #[serde(rename = "remove-services")]
    RemoveServices {
        #[serde(rename = "ids")]
        id_v: Vec<String>,
    },
    /// An ordered list of RFC 6902 operations against the whole document.
    #[serde(rename = "ietf-json-patch")]
    IetfJsonPatch {
        #[serde(rename = "patches")]
        operation_v: Vec<JsonPatchOperation>,
    },
    /// Discards the prior document entirely and substitutes the supplied one verbatim.
    #[serde(rename = "replace")]
    Replace { document: serde_json::Value },
}

impl Patch {
    pub fn action(&self) -> PatchAction {
        match self {
            Self::AddPublicKeys { .. } => PatchAction::AddPublicKeys,
            Self::RemovePublicKeys { .. } => PatchAction::RemovePublicKeys,
            Self::AddServices { .. } => PatchAction::AddServices,
            Self::RemoveServices { .. } => PatchAction::RemoveServices,
            Self::IetfJsonPatch { .. } => PatchAction::IetfJsonPatch,
            Self::Replace { .. } => PatchAction::Replace,
        }
    }
}
