use crate::Result;

/// Content-addressable storage collaborator.  Writes are idempotent: writing the same bytes
/// twice yields the same address, so duplicate batch writes after a failed anchoring attempt
/// are harmless.
#[async_trait::async_trait]
pub trait CasClient: Send + Sync {
    /// Persists content and returns its content address.
    async fn write(&self, content: &[u8]) -> Result<String>;
    /// Reads content back by address.
    async fn read(&self, address: &str) -> Result<Vec<u8>>;
}
