//! Destination-side record types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record to be created in the Bitable table
///
/// Field names are the destination's configured column names (see
/// [`crate::constants`]); values are already in the wire shape the
/// batch-create endpoint expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitableRecord {
    pub fields: Map<String, Value>,
}

/// A row already present in the destination table
///
/// `record_id` is the destination's own row identifier. It is captured for
/// future update/delete support but unused by the insert-only sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedRecord {
    pub note_id: String,
    pub record_id: String,
}

/// Outcome of writing one batch-create chunk
///
/// Chunk failures do not abort the run; callers inspect the outcome list to
/// count what was actually imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkOutcome {
    /// Zero-based chunk position
    pub index: usize,
    /// Number of records in this chunk
    pub records: usize,
    /// Failure detail, `None` on success
    pub error: Option<String>,
}

impl ChunkOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
