//! Sync orchestrator

use std::collections::HashSet;
use std::sync::Arc;

use notebridge_domain::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::convert::note_to_record;
use super::diff::select_new_notes;
use super::ports::{NoteSource, RecordStore};

/// Summary counts for one sync run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Notes returned by the source
    pub total: usize,
    /// Identifiers already present in the destination
    pub already_imported: usize,
    /// Notes selected for import this run
    pub pending: usize,
    /// Records covered by successful chunks
    pub imported: usize,
    /// Chunks that failed and were skipped
    pub failed_chunks: usize,
}

/// Orchestrates one incremental sync run
///
/// Holds the two ports; the run sequence is strictly linear and issues no
/// destination writes when nothing is new.
pub struct SyncService {
    source: Arc<dyn NoteSource>,
    store: Arc<dyn RecordStore>,
}

impl SyncService {
    pub fn new(source: Arc<dyn NoteSource>, store: Arc<dyn RecordStore>) -> Self {
        Self { source, store }
    }

    /// Perform one sync run
    ///
    /// 1. List identifiers already present in the destination
    /// 2. Fetch the complete source note list
    /// 3. Diff by `note_id` (set membership)
    /// 4. Stop early when nothing is new
    /// 5. Convert and batch-create the remainder
    ///
    /// The known-identifier set is computed once and treated as
    /// authoritative for the remainder of the run.
    pub async fn run(&self) -> Result<SyncReport> {
        let known_records = self.store.list_known_ids().await?;
        let known: HashSet<String> =
            known_records.into_iter().map(|record| record.note_id).collect();
        info!(known = known.len(), "destination identifiers loaded");

        let notes = self.source.fetch_all_notes().await?;
        let total = notes.len();

        let new_notes = select_new_notes(notes, &known);
        let pending = new_notes.len();
        info!(total, already_imported = known.len(), pending, "sync diff computed");

        if new_notes.is_empty() {
            info!("all notes already synced, nothing to import");
            return Ok(SyncReport {
                total,
                already_imported: known.len(),
                pending: 0,
                imported: 0,
                failed_chunks: 0,
            });
        }

        let records = new_notes.iter().map(note_to_record).collect();
        let outcomes = self.store.batch_create(records).await?;

        let imported =
            outcomes.iter().filter(|o| o.is_success()).map(|o| o.records).sum::<usize>();
        let failed_chunks = outcomes.iter().filter(|o| !o.is_success()).count();

        if failed_chunks > 0 {
            warn!(failed_chunks, "some chunks failed and were skipped");
        }
        info!(total, pending, imported, "sync run finished");

        Ok(SyncReport {
            total,
            already_imported: known.len(),
            pending,
            imported,
            failed_chunks,
        })
    }
}
