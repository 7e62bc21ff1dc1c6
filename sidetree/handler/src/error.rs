use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bad request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Failed constraint: {0}")]
    FailedConstraint(Cow<'static, str>),
    #[error("Not found: {0}")]
    NotFound(&'static str),
    #[error(transparent)]
    OperationEngine(#[from] sidetree_core::Error),
    #[error(transparent)]
    Storage(#[from] sidetree_op_store::Error),
}
