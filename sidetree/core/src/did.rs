use crate::{DIDSuffix, Error, Result};

/// Separator between namespace, suffix, and long-form segments of a DID.
pub const NAMESPACE_DELIMITER: char = ':';

/// A DID parsed relative to a configured namespace and its aliases.
///
/// Two forms are recognized:
/// - short form: `<namespace>:<uniqueSuffix>`
/// - long form: `<namespace>:<uniqueSuffix>:<base64url(JCS({delta, suffixData}))>`
///
/// The namespace recorded here is the one that actually matched (canonical or alias), so the
/// caller can report a canonical id when an alias was used.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedDID {
    pub namespace: String,
    pub did_suffix: DIDSuffix,
    pub initial_state_o: Option<String>,
}

impl ParsedDID {
    /// Parses `did` against the configured canonical namespace and alias namespaces.
    pub fn parse(did: &str, namespace: &str, alias_v: &[String]) -> Result<Self> {
        let matched_namespace = std::iter::once(namespace)
            .chain(alias_v.iter().map(String::as_str))
            .find(|candidate| {
                did.len() > candidate.len()
                    && did.starts_with(candidate)
                    && did[candidate.len()..].starts_with(NAMESPACE_DELIMITER)
            })
            .ok_or_else(|| {
                Error::Malformed("did must start with configured namespace".into())
            })?;
        let remainder = &did[matched_namespace.len() + 1..];
        if remainder.is_empty() {
            return Err(Error::Malformed("did suffix is empty".into()));
        }
        let mut segment_iter = remainder.split(NAMESPACE_DELIMITER);
        let suffix_segment = segment_iter.next().expect("split yields at least one segment");
        let initial_state_o = segment_iter.next().map(str::to_string);
        if segment_iter.next().is_some() {
            return Err(Error::Malformed(
                "did has extra segments after the long-form initial state".into(),
            ));
        }
        if let Some(initial_state) = initial_state_o.as_deref() {
            if initial_state.is_empty() {
                return Err(Error::Malformed("long-form initial state is empty".into()));
            }
        }
        let did_suffix = DIDSuffix::try_from(suffix_segment)?;
        Ok(Self {
            namespace: matched_namespace.to_string(),
            did_suffix,
            initial_state_o,
        })
    }
    pub fn is_long_form(&self) -> bool {
        self.initial_state_o.is_some()
    }
    /// The short form of this DID under the namespace it was parsed with.
    pub fn short_form(&self) -> String {
        format!("{}{}{}", self.namespace, NAMESPACE_DELIMITER, self.did_suffix)
    }
}

/// Forms the short-form DID string for a suffix under the given namespace.
pub fn short_form_did(namespace: &str, did_suffix: &DIDSuffix) -> String {
    format!("{}{}{}", namespace, NAMESPACE_DELIMITER, did_suffix)
}
