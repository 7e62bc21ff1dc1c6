use std::sync::Arc;

use anyhow::Context;
use sidetree_core::ProtocolVersioning;
use sidetree_op_store::{AnchorString, CasClient, LedgerClient};

use crate::{cut_batch, BatchFile, Error, OperationQueue};

/// Default interval between batch writing cycles.
pub const DEFAULT_BATCH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

#[derive(Clone, Copy, Debug)]
pub struct BatchWriterConfig {
    pub batch_interval: std::time::Duration,
}

impl Default for BatchWriterConfig {
    fn default() -> Self {
        Self {
            batch_interval: DEFAULT_BATCH_INTERVAL,
        }
    }
}

/// Orchestrates anchoring: on a repeating cycle, cut a batch from the queue, persist it to
/// CAS, anchor the reference on the ledger, and only then remove the cut operations from the
/// queue.  If anchoring fails after the CAS write, the queue is left untouched and the next
/// cycle re-cuts the same operations: at-least-once anchoring, at the cost of a possible
/// duplicate CAS blob (harmless, CAS is content-addressed).
pub struct BatchWriter {
    queue: Arc<OperationQueue>,
    cas_client: Arc<dyn CasClient>,
    ledger_client: Arc<dyn LedgerClient>,
    versioning: Arc<ProtocolVersioning>,
    config: BatchWriterConfig,
}

/// Handle to a started batch writer.  Dropping it without calling `stop` still ends the loop
/// (the shutdown channel closes), but does not wait for the in-flight cycle.
pub struct BatchWriterHandle {
    shutdown_tx: tokio::sync::watch::Sender<bool>,
    join_handle: tokio::task::JoinHandle<()>,
}

impl BatchWriterHandle {
    /// Signals cancellation and waits for the in-flight cycle to finish before returning, so
    /// no batch is ever left half-written.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(err) = self.join_handle.await {
            tracing::warn!("batch writer task did not shut down cleanly: {}", err);
        }
    }
}

impl BatchWriter {
    pub fn new(
        queue: Arc<OperationQueue>,
        cas_client: Arc<dyn CasClient>,
        ledger_client: Arc<dyn LedgerClient>,
        versioning: Arc<ProtocolVersioning>,
        config: BatchWriterConfig,
    ) -> Self {
        Self {
            queue,
            cas_client,
            ledger_client,
            versioning,
            config,
        }
    }
    /// Starts the repeating background cycle.
    pub fn start(self) -> BatchWriterHandle {
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        let join_handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.config.batch_interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            tracing::info!(
                "batch writer started, cycle interval {:?}",
                self.config.batch_interval
            );
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => {
                        tracing::info!("batch writer stopping");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(err) = self.write_batch().await {
                            tracing::warn!(
                                "batch writing cycle failed, operations remain queued for retry: {:#}",
                                err
                            );
                        }
                    }
                }
            }
        });
        BatchWriterHandle {
            shutdown_tx,
            join_handle,
        }
    }
    /// One batch writing cycle.  Returns the number of operations anchored (zero when the
    /// queue was empty).  Public so tests and callers can drive cycles directly.
    pub async fn write_batch(&self) -> anyhow::Result<usize> {
        // New batches are always cut under the newest protocol version.
        let protocol = self.versioning.latest()?;
        let batch_v = match cut_batch(self.queue.as_ref(), protocol) {
            Ok(batch_v) => batch_v,
            Err(err @ Error::OperationExceedsCapacity { .. }) => {
                // Permanent: this operation can never fit a batch.  Remove it so it cannot
                // wedge the queue for every operation behind it, and surface the error.
                tracing::error!("removing unbatchable operation from the queue: {}", err);
                self.queue.remove_batch(1);
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };
        if batch_v.is_empty() {
            tracing::trace!("no operations pending, nothing to anchor");
            return Ok(0);
        }

        let oldest_age = time::OffsetDateTime::now_utc() - batch_v[0].enqueued_at;
        tracing::info!(
            "cutting batch of {} operations ({} still queued, oldest admitted {:.1}s ago)",
            batch_v.len(),
            self.queue.len() - batch_v.len(),
            oldest_age.as_seconds_f64()
        );

        let batch_file = BatchFile::from_queued_operations(batch_v.as_slice());
        let content = batch_file.canonical_bytes()?;
        let cas_address = self
            .cas_client
            .write(content.as_slice())
            .await
            .context("failed to write batch file to CAS")?;
        let anchor_string = AnchorString {
            operation_count: batch_v.len(),
            cas_address,
        };
        let transaction_reference = self
            .ledger_client
            .write_anchor(&anchor_string)
            .await
            .context("failed to anchor batch reference on the ledger")?;

        // Both writes succeeded; the operations are durably anchored and leave the queue.
        self.queue.remove_batch(batch_v.len());
        tracing::info!(
            "anchored batch {} at transaction time {} number {}",
            anchor_string,
            transaction_reference.transaction_time,
            transaction_reference.transaction_number
        );
        Ok(batch_v.len())
    }
}
