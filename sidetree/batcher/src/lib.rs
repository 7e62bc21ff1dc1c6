mod batch_cutter;
mod batch_file;
mod batch_writer;
mod error;
mod operation_queue;

pub use crate::{
    batch_cutter::cut_batch,
    batch_file::BatchFile,
    batch_writer::{BatchWriter, BatchWriterConfig, BatchWriterHandle, DEFAULT_BATCH_INTERVAL},
    error::Error,
    operation_queue::{OperationQueue, QueuedOperation},
};

pub type Result<T> = std::result::Result<T, Error>;
