//! # NoteBridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the two external services
//! - The incremental-sync pipeline (diff, field mapping, orchestration)
//!
//! ## Architecture Principles
//! - Only depends on `notebridge-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod sync;

// Re-export specific items to avoid ambiguity
pub use sync::convert::note_to_record;
pub use sync::diff::select_new_notes;
pub use sync::ports::{NoteSource, RecordStore};
pub use sync::service::{SyncReport, SyncService};
