//! Port interfaces for sync operations

use async_trait::async_trait;
use notebridge_domain::{BitableRecord, ChunkOutcome, ImportedRecord, Note, Result};

/// Trait for reading the complete note list from the source service
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// Fetch every note, following pagination until exhausted
    async fn fetch_all_notes(&self) -> Result<Vec<Note>>;
}

/// Trait for the destination table
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List rows already present in the destination
    ///
    /// Only the external note identifier (and the row's own id) is read.
    async fn list_known_ids(&self) -> Result<Vec<ImportedRecord>>;

    /// Create records in chunks, returning one outcome per chunk
    ///
    /// A failed chunk must not abort the remaining chunks.
    async fn batch_create(&self, records: Vec<BitableRecord>) -> Result<Vec<ChunkOutcome>>;
}
