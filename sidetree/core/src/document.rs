use crate::{Error, Result};

/// Document property holding the public key entries.
pub const PUBLIC_KEYS_PROPERTY: &str = "publicKeys";
/// Document property holding the service entries.
pub const SERVICES_PROPERTY: &str = "services";
/// Property identifying an entry within a keyed array, and the document itself externally.
pub const ID_PROPERTY: &str = "id";

/// The document being built by patch application.  A schema-free mapping from property names to
/// JSON values; document-shape validation is external policy and never happens at this layer.
///
/// Backed by `serde_json::Map`, which iterates in sorted key order, so serialization of equal
/// documents is deterministic.  Canonical serialization for hashing must go through
/// [`Document::serialize_canonically`].
#[derive(Clone, Debug, Default, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Document(serde_json::Map<String, serde_json::Value>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
    /// Interprets a JSON value as a document.  The value must be an object.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(property_m) => Ok(Self(property_m)),
            _ => Err(Error::Malformed("document must be a JSON object".into())),
        }
    }
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.0.clone())
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, property: &str) -> Option<&serde_json::Value> {
        self.0.get(property)
    }
    pub fn set(&mut self, property: &str, value: serde_json::Value) {
        self.0.insert(property.to_string(), value);
    }
    pub fn remove(&mut self, property: &str) -> Option<serde_json::Value> {
        self.0.remove(property)
    }
    /// The entries of an array-valued property, or an empty slice if the property is absent or
    /// not an array.
    pub fn entries(&self, property: &str) -> &[serde_json::Value] {
        match self.0.get(property) {
            Some(serde_json::Value::Array(entry_v)) => entry_v.as_slice(),
            _ => &[],
        }
    }
    pub fn public_keys(&self) -> &[serde_json::Value] {
        self.entries(PUBLIC_KEYS_PROPERTY)
    }
    pub fn services(&self) -> &[serde_json::Value] {
        self.entries(SERVICES_PROPERTY)
    }
    /// Looks up an entry of a keyed array property by its "id" member.
    pub fn entry_with_id(&self, property: &str, id: &str) -> Option<&serde_json::Value> {
        self.entries(property)
            .iter()
            .find(|entry| entry_id(entry) == Some(id))
    }
    /// Canonical (JCS) serialization.  Required for anything that feeds a hash; plain
    /// `serde_json::to_string` does not produce canonical JSON.
    pub fn serialize_canonically(&self) -> Result<String> {
        Ok(serde_json_canonicalizer::to_string(self).map_err(|_| {
            Error::Malformed("failed to serialize document to canonical JSON".into())
        })?)
    }
}

/// The "id" member of an entry, if the entry is an object carrying a string id.
pub(crate) fn entry_id(entry: &serde_json::Value) -> Option<&str> {
    entry.get(ID_PROPERTY).and_then(serde_json::Value::as_str)
}
