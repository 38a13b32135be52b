//! Note → Bitable record field mapping

use notebridge_domain::constants::{
    FIELD_BODY_TEXT, FIELD_CONTENT, FIELD_CREATED_AT, FIELD_EDITED_AT, FIELD_NOTE_ID,
    FIELD_NOTE_KIND, FIELD_SOURCE_LINK, FIELD_TAGS, FIELD_TITLE, LINK_ATTACHMENT_TYPE,
};
use notebridge_domain::{BitableRecord, Note};
use serde_json::{json, Map, Value};

/// Convert one note into the destination record shape
///
/// Content and timestamps ride through verbatim. The source-link field is
/// present only when the first attachment is a link; there is no null/empty
/// placeholder otherwise.
#[must_use]
pub fn note_to_record(note: &Note) -> BitableRecord {
    let mut fields = Map::new();

    fields.insert(FIELD_TITLE.to_string(), Value::String(note.title.clone()));
    fields.insert(FIELD_CONTENT.to_string(), note.content.clone());
    fields.insert(FIELD_BODY_TEXT.to_string(), Value::String(note.body_text.clone()));
    fields.insert(FIELD_NOTE_ID.to_string(), Value::String(note.note_id.clone()));
    fields.insert(FIELD_NOTE_KIND.to_string(), json!([note.kind_tag()]));
    fields.insert(
        FIELD_TAGS.to_string(),
        Value::Array(note.tags.iter().map(|tag| Value::String(tag.name.clone())).collect()),
    );

    if let Some(link) = source_link(note) {
        fields.insert(FIELD_SOURCE_LINK.to_string(), link);
    }

    fields.insert(FIELD_CREATED_AT.to_string(), note.created_at.clone());
    fields.insert(FIELD_EDITED_AT.to_string(), note.edit_time.clone());

    BitableRecord { fields }
}

/// Link-field value from the attachment at index 0, if it qualifies
///
/// Display text falls back to the note title when the attachment title is
/// missing or empty.
fn source_link(note: &Note) -> Option<Value> {
    let attachment = note.attachments.first()?;
    if attachment.kind != LINK_ATTACHMENT_TYPE {
        return None;
    }

    let text = attachment
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or(note.title.as_str());

    Some(json!({ "text": text, "link": attachment.url }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn note_from(value: Value) -> Note {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_all_plain_fields() {
        let note = note_from(json!({
            "note_id": "n-9",
            "title": "晨间笔记",
            "content": {"ops": [1, 2]},
            "body_text": "正文内容",
            "entry_type": "note",
            "note_type": "text",
            "tags": [{"name": "工作"}, {"name": "灵感"}],
            "created_at": "2024-01-02 03:04:05",
            "edit_time": "2024-01-03 04:05:06"
        }));

        let record = note_to_record(&note);
        let fields = &record.fields;

        assert_eq!(fields[FIELD_TITLE], json!("晨间笔记"));
        assert_eq!(fields[FIELD_CONTENT], json!({"ops": [1, 2]}));
        assert_eq!(fields[FIELD_BODY_TEXT], json!("正文内容"));
        assert_eq!(fields[FIELD_NOTE_ID], json!("n-9"));
        assert_eq!(fields[FIELD_NOTE_KIND], json!(["note_text"]));
        assert_eq!(fields[FIELD_TAGS], json!(["工作", "灵感"]));
        assert_eq!(fields[FIELD_CREATED_AT], json!("2024-01-02 03:04:05"));
        assert_eq!(fields[FIELD_EDITED_AT], json!("2024-01-03 04:05:06"));
    }

    #[test]
    fn link_attachment_produces_link_field() {
        let note = note_from(json!({
            "note_id": "n-1",
            "title": "T",
            "attachments": [{"type": "link", "url": "https://x", "title": "原文标题"}]
        }));

        let record = note_to_record(&note);

        assert_eq!(
            record.fields[FIELD_SOURCE_LINK],
            json!({"text": "原文标题", "link": "https://x"})
        );
    }

    #[test]
    fn link_text_falls_back_to_note_title() {
        let missing_title = note_from(json!({
            "note_id": "n-2",
            "title": "备用标题",
            "attachments": [{"type": "link", "url": "https://x"}]
        }));
        assert_eq!(
            note_to_record(&missing_title).fields[FIELD_SOURCE_LINK],
            json!({"text": "备用标题", "link": "https://x"})
        );

        let empty_title = note_from(json!({
            "note_id": "n-3",
            "title": "备用标题",
            "attachments": [{"type": "link", "url": "https://x", "title": ""}]
        }));
        assert_eq!(
            note_to_record(&empty_title).fields[FIELD_SOURCE_LINK],
            json!({"text": "备用标题", "link": "https://x"})
        );
    }

    #[test]
    fn no_attachments_omits_link_field_entirely() {
        let note = note_from(json!({"note_id": "n-4", "title": "T"}));
        assert!(!note_to_record(&note).fields.contains_key(FIELD_SOURCE_LINK));
    }

    #[test]
    fn non_link_first_attachment_omits_link_field() {
        // A link attachment at a later index must not be consulted
        let note = note_from(json!({
            "note_id": "n-5",
            "attachments": [
                {"type": "image", "url": "https://img"},
                {"type": "link", "url": "https://x", "title": "T"}
            ]
        }));
        assert!(!note_to_record(&note).fields.contains_key(FIELD_SOURCE_LINK));
    }
}
