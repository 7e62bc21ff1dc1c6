use crate::{
    apply_json_patch, document::entry_id, Document, Error, Patch, Result, PUBLIC_KEYS_PROPERTY,
    SERVICES_PROPERTY,
};

/// Applies an ordered sequence of patches to a document snapshot, producing a new snapshot.
///
/// Application is all-or-nothing: patches are applied to a scratch copy, and any failure
/// discards the copy, so callers never observe a partially patched document.
pub fn apply_patches(document: &Document, patch_v: &[Patch]) -> Result<Document> {
    let mut updated_document = document.clone();
    for patch in patch_v {
        apply_patch(&mut updated_document, patch)?;
    }
    Ok(updated_document)
}

fn apply_patch(document: &mut Document, patch: &Patch) -> Result<()> {
    match patch {
        Patch::AddPublicKeys { public_key_v } => {
            add_entries(document, PUBLIC_KEYS_PROPERTY, public_key_v.as_slice())
        }
        Patch::RemovePublicKeys { id_v } => {
            remove_entries(document, PUBLIC_KEYS_PROPERTY, id_v.as_slice());
            Ok(())
        }
        Patch::AddServices { service_v } => {
            add_entries(document, SERVICES_PROPERTY, service_v.as_slice())
        }
        Patch::RemoveServices { id_v } => {
            remove_entries(document, SERVICES_PROPERTY, id_v.as_slice());
            Ok(())
        }
        Patch::IetfJsonPatch { operation_v } => {
            let mut document_value = document.to_value();
            apply_json_patch(&mut document_value, operation_v.as_slice())?;
            *document = Document::from_value(document_value)?;
            Ok(())
        }
        Patch::Replace {
            document: replacement,
        } => {
            *document = Document::from_value(replacement.clone())?;
            Ok(())
        }
    }
}

/// Upserts entries into a keyed array property.  An entry whose id matches an existing entry
/// replaces it in place (same array position); otherwise the entry is appended.
fn add_entries(
    document: &mut Document,
    property: &str,
    new_entry_v: &[serde_json::Value],
) -> Result<()> {
    let mut entry_v = document.entries(property).to_vec();
    for new_entry in new_entry_v {
        let Some(new_entry_id) = entry_id(new_entry) else {
            return Err(Error::Patch(
                format!("{} entry is missing a string \"id\" member", property).into(),
            ));
        };
        match entry_v
            .iter()
            .position(|entry| entry_id(entry) == Some(new_entry_id))
        {
            Some(index) => entry_v[index] = new_entry.clone(),
            None => entry_v.push(new_entry.clone()),
        }
    }
    document.set(property, serde_json::Value::Array(entry_v));
    Ok(())
}

/// Removes entries by id.  Removing a non-existent id is a no-op, not an error.
fn remove_entries(document: &mut Document, property: &str, id_v: &[String]) {
    let entry_v: Vec<serde_json::Value> = document
        .entries(property)
        .iter()
        .filter(|entry| {
            !entry_id(entry)
                .map(|id| id_v.iter().any(|removed_id| removed_id == id))
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    document.set(property, serde_json::Value::Array(entry_v));
}
