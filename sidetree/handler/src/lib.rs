mod document_handler;
mod error;
mod resolution_result;

pub use crate::{
    document_handler::DocumentHandler,
    error::Error,
    resolution_result::{
        DocumentMetadata, MethodMetadata, ResolutionResult, DID_RESOLUTION_CONTEXT,
    },
};

pub type Result<T> = std::result::Result<T, Error>;
