//! Full-pipeline sync test against mocked source and destination services

use std::sync::Arc;
use std::time::Duration;

use notebridge_core::{NoteSource, RecordStore, SyncService};
use notebridge_domain::constants::FIELD_NOTE_ID;
use notebridge_domain::{FeishuConfig, GetNotesConfig};
use notebridge_infra::integrations::bitable::{BitableClient, TenantTokenProvider};
use notebridge_infra::integrations::getnotes::GetNotesClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/bitable/v1/apps/appX/tables/tblY/records/search";
const BATCH_PATH: &str = "/bitable/v1/apps/appX/tables/tblY/records/batch_create";

fn note(id: u64, note_id: &str) -> Value {
    json!({
        "id": id,
        "note_id": note_id,
        "title": format!("title-{note_id}"),
        "content": {"blocks": []},
        "body_text": format!("body-{note_id}"),
        "entry_type": "note",
        "note_type": "text",
        "tags": [],
        "created_at": "2024-06-01 08:00:00",
        "edit_time": "2024-06-01 09:00:00"
    })
}

async fn mount_source(server: &MockServer, notes: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/voicenotes/web/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "c": {"list": notes, "total_items": 3, "has_more": false}
        })))
        .mount(server)
        .await;
}

async fn mount_destination(server: &MockServer, known_ids: &[&str]) {
    Mock::given(method("POST"))
        .and(path("/auth/v3/tenant_access_token/internal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok", "tenant_access_token": "tok", "expire": 7200
        })))
        .mount(server)
        .await;

    let items: Vec<Value> = known_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            json!({
                "record_id": format!("r{i}"),
                "fields": {FIELD_NOTE_ID: [{"text": id, "type": "text"}]}
            })
        })
        .collect();
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"items": items, "has_more": false, "total": known_ids.len()}
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(BATCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .mount(server)
        .await;
}

fn build_service(source_server: &MockServer, dest_server: &MockServer) -> SyncService {
    let source_config = GetNotesConfig {
        token: "source-token".to_string(),
        base_url: source_server.uri(),
    };
    let feishu_config = FeishuConfig {
        app_id: "app-id".to_string(),
        app_secret: "app-secret".to_string(),
        app_token: "appX".to_string(),
        table_id: "tblY".to_string(),
        base_url: dest_server.uri(),
    };

    let source = Arc::new(
        GetNotesClient::new(&source_config).unwrap().with_page_delay(Duration::ZERO),
    );
    let tokens = Arc::new(TenantTokenProvider::new(&feishu_config).unwrap());
    let store = Arc::new(
        BitableClient::new(&feishu_config, tokens).unwrap().with_batch_delay(Duration::ZERO),
    );

    SyncService::new(source as Arc<dyn NoteSource>, store as Arc<dyn RecordStore>)
}

#[tokio::test]
async fn syncs_only_unknown_notes_as_one_batch() {
    let source_server = MockServer::start().await;
    let dest_server = MockServer::start().await;

    mount_source(&source_server, vec![note(1, "a"), note(2, "b"), note(3, "c")]).await;
    mount_destination(&dest_server, &["b"]).await;

    let report = build_service(&source_server, &dest_server).run().await.unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.already_imported, 1);
    assert_eq!(report.pending, 2);
    assert_eq!(report.imported, 2);
    assert_eq!(report.failed_chunks, 0);

    // Exactly one batch request, carrying [a, c] in source order
    let batch_requests: Vec<_> = dest_server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == BATCH_PATH)
        .collect();
    assert_eq!(batch_requests.len(), 1);

    let body: Value = serde_json::from_slice(&batch_requests[0].body).unwrap();
    let submitted: Vec<&str> = body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["fields"][FIELD_NOTE_ID].as_str().unwrap())
        .collect();
    assert_eq!(submitted, vec!["a", "c"]);
}

#[tokio::test]
async fn fully_synced_destination_receives_no_writes() {
    let source_server = MockServer::start().await;
    let dest_server = MockServer::start().await;

    mount_source(&source_server, vec![note(1, "a"), note(2, "b"), note(3, "c")]).await;
    mount_destination(&dest_server, &["a", "b", "c"]).await;

    let report = build_service(&source_server, &dest_server).run().await.unwrap();

    assert_eq!(report.pending, 0);
    assert_eq!(report.imported, 0);
    assert!(dest_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .all(|r| r.url.path() != BATCH_PATH));
}

#[tokio::test]
async fn source_failure_aborts_before_any_write() {
    let source_server = MockServer::start().await;
    let dest_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voicenotes/web/notes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&source_server)
        .await;
    mount_destination(&dest_server, &[]).await;

    let result = build_service(&source_server, &dest_server).run().await;

    assert!(result.is_err());
    assert!(dest_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .all(|r| r.url.path() != BATCH_PATH));
}
