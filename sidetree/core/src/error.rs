use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Operation rejected: identifier is deactivated")]
    AfterDeactivate,
    #[error("Authorization failed: {0}")]
    Authorization(Cow<'static, str>),
    #[error("Invalid key: {0}")]
    InvalidKey(Cow<'static, str>),
    #[error("Malformed: {0}")]
    Malformed(Cow<'static, str>),
    #[error("No protocol version in effect at anchor time {0}")]
    NoProtocolVersion(u64),
    #[error("Not found: {0}")]
    NotFound(&'static str),
    #[error("Patch failed: {0}")]
    Patch(Cow<'static, str>),
    #[error("Validation failed: {0}")]
    Validation(Cow<'static, str>),
}
