//! Wire types for the notes list endpoint

use notebridge_domain::Note;
use serde::Deserialize;

/// One page of the note list, unwrapped from the service envelope
#[derive(Debug, Clone)]
pub struct NotesPage {
    pub list: Vec<Note>,
    pub total_count: u64,
    pub has_more: bool,
}

/// The service wraps every list response in a `c` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct NotesEnvelope {
    pub c: NotesPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotesPayload {
    #[serde(default)]
    pub list: Vec<Note>,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub has_more: bool,
}
