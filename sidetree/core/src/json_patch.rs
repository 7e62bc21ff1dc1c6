use crate::{Error, Result};

/// A primitive RFC 6902 operation, tagged by its "op" member.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum JsonPatchOperation {
    Add {
        path: String,
        value: serde_json::Value,
    },
    Remove {
        path: String,
    },
    Replace {
        path: String,
        value: serde_json::Value,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
    },
    Test {
        path: String,
        value: serde_json::Value,
    },
}

/// Applies an ordered list of RFC 6902 operations to `document`, mutating it in place.
///
/// Callers needing atomicity must apply against a scratch copy: this function may have
/// partially mutated `document` when it returns an error.
pub fn apply_json_patch(
    document: &mut serde_json::Value,
    operation_v: &[JsonPatchOperation],
) -> Result<()> {
    for operation in operation_v {
        apply_json_patch_operation(document, operation)?;
    }
    Ok(())
}

fn apply_json_patch_operation(
    document: &mut serde_json::Value,
    operation: &JsonPatchOperation,
) -> Result<()> {
    match operation {
        JsonPatchOperation::Add { path, value } => {
            add(document, path.as_str(), value.clone())
        }
        JsonPatchOperation::Remove { path } => {
            remove(document, path.as_str()).map(|_| ())
        }
        JsonPatchOperation::Replace { path, value } => {
            let target = get_mut(document, path.as_str())?;
            *target = value.clone();
            Ok(())
        }
        JsonPatchOperation::Move { from, path } => {
            let value = remove(document, from.as_str())?;
            add(document, path.as_str(), value)
        }
        JsonPatchOperation::Copy { from, path } => {
            let value = get_mut(document, from.as_str())?.clone();
            add(document, path.as_str(), value)
        }
        JsonPatchOperation::Test { path, value } => {
            let target = get_mut(document, path.as_str())?;
            if target != value {
                return Err(Error::Patch(
                    format!("test assertion failed at {:?}", path).into(),
                ));
            }
            Ok(())
        }
    }
}

/// Splits a JSON pointer into its unescaped reference tokens.  The empty pointer refers to
/// the whole document.
fn pointer_tokens(path: &str) -> Result<Vec<String>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    if !path.starts_with('/') {
        return Err(Error::Patch(
            format!("JSON pointer {:?} must be empty or start with '/'", path).into(),
        ));
    }
    Ok(path[1..]
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect())
}

fn parse_array_index(token: &str, len: usize, path: &str) -> Result<usize> {
    let index: usize = token.parse().map_err(|_| {
        Error::Patch(format!("invalid array index {:?} in pointer {:?}", token, path).into())
    })?;
    if index >= len {
        return Err(Error::Patch(
            format!("array index {} out of bounds in pointer {:?}", index, path).into(),
        ));
    }
    Ok(index)
}

/// Resolves a pointer to an existing value.  Errors if any step of the path does not exist.
fn get_mut<'a>(
    document: &'a mut serde_json::Value,
    path: &str,
) -> Result<&'a mut serde_json::Value> {
    let token_v = pointer_tokens(path)?;
    get_mut_by_tokens(document, token_v.as_slice(), path)
}

fn add(document: &mut serde_json::Value, path: &str, value: serde_json::Value) -> Result<()> {
    let token_v = pointer_tokens(path)?;
    let Some((last_token, parent_token_v)) = token_v.split_last() else {
        // Whole-document add replaces the document.
        *document = value;
        return Ok(());
    };
    let parent = get_mut_by_tokens(document, parent_token_v, path)?;
    match parent {
        serde_json::Value::Object(member_m) => {
            member_m.insert(last_token.clone(), value);
            Ok(())
        }
        serde_json::Value::Array(element_v) => {
            if last_token == "-" {
                element_v.push(value);
                return Ok(());
            }
            let index: usize = last_token.parse().map_err(|_| {
                Error::Patch(
                    format!("invalid array index {:?} in pointer {:?}", last_token, path).into(),
                )
            })?;
            if index > element_v.len() {
                return Err(Error::Patch(
                    format!("array index {} out of bounds in pointer {:?}", index, path).into(),
                ));
            }
            element_v.insert(index, value);
            Ok(())
        }
        _ => Err(Error::Patch(
            format!("pointer {:?} targets a member of a non-container value", path).into(),
        )),
    }
}

fn remove(document: &mut serde_json::Value, path: &str) -> Result<serde_json::Value> {
    let token_v = pointer_tokens(path)?;
    let Some((last_token, parent_token_v)) = token_v.split_last() else {
        return Err(Error::Patch(
            "cannot remove the whole document".into(),
        ));
    };
    let parent = get_mut_by_tokens(document, parent_token_v, path)?;
    match parent {
        serde_json::Value::Object(member_m) => member_m.remove(last_token).ok_or_else(|| {
            Error::Patch(format!("pointer {:?} does not exist in document", path).into())
        }),
        serde_json::Value::Array(element_v) => {
            let index = parse_array_index(last_token, element_v.len(), path)?;
            Ok(element_v.remove(index))
        }
        _ => Err(Error::Patch(
            format!("pointer {:?} targets a member of a non-container value", path).into(),
        )),
    }
}

fn get_mut_by_tokens<'a>(
    document: &'a mut serde_json::Value,
    token_v: &[String],
    path: &str,
) -> Result<&'a mut serde_json::Value> {
    let mut value = document;
    for token in token_v {
        value = match value {
            serde_json::Value::Object(member_m) => member_m.get_mut(token).ok_or_else(|| {
                Error::Patch(format!("pointer {:?} does not exist in document", path).into())
            })?,
            serde_json::Value::Array(element_v) => {
                let index = parse_array_index(token, element_v.len(), path)?;
                &mut element_v[index]
            }
            _ => {
                return Err(Error::Patch(
                    format!("pointer {:?} traverses a non-container value", path).into(),
                ))
            }
        };
    }
    Ok(value)
}
