//! Source-service note model
//!
//! The notes API is not under our control, so every field except the stable
//! `note_id` defaults when absent. Rich content and timestamps are opaque to
//! this system and ride through as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A note as returned by the Get Notes list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Stable unique identifier; the deduplication key across syncs
    pub note_id: String,

    /// Pagination identifier. Distinct from `note_id`: the list endpoint
    /// pages with `since_id` derived from this value, which may be a number
    /// or a string depending on the service version.
    #[serde(default)]
    pub id: Value,

    #[serde(default)]
    pub title: String,

    /// Rich content representation, passed through verbatim
    #[serde(default)]
    pub content: Value,

    /// Plain-text rendering of the content
    #[serde(default)]
    pub body_text: String,

    #[serde(default)]
    pub entry_type: String,

    #[serde(default)]
    pub note_type: String,

    #[serde(default)]
    pub tags: Vec<NoteTag>,

    #[serde(default)]
    pub attachments: Vec<NoteAttachment>,

    /// Creation timestamp, opaque format, passed through verbatim
    #[serde(default)]
    pub created_at: Value,

    /// Last-edit timestamp, opaque format, passed through verbatim
    #[serde(default)]
    pub edit_time: Value,
}

impl Note {
    /// Pagination cursor derived from this note's `id`
    ///
    /// Numbers are stringified; anything else yields an empty cursor, which
    /// terminates paging.
    #[must_use]
    pub fn cursor_id(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        }
    }

    /// The single note-kind tag, `"{entry_type}_{note_type}"`
    #[must_use]
    pub fn kind_tag(&self) -> String {
        format!("{}_{}", self.entry_type, self.note_type)
    }
}

/// A tag attached to a note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteTag {
    #[serde(default)]
    pub name: String,
}

/// An attachment on a note
///
/// Only the first attachment is ever consulted, and only when its declared
/// type is `"link"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteAttachment {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub title: Option<String>,
}
