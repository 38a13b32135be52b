//! Get Notes source integration
//!
//! Read-only client for the notes list endpoint, including the cursor-based
//! paginator that retrieves the complete note list.

pub mod client;
pub mod types;

pub use client::GetNotesClient;
pub use types::NotesPage;
