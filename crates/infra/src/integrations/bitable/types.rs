//! Wire types for the Feishu Open API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the tenant-token exchange
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub app_id: &'a str,
    pub app_secret: &'a str,
}

/// Tenant-token exchange response
///
/// The Open API reports failures with HTTP 200 and a non-zero `code`, so the
/// token fields are optional.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub tenant_access_token: Option<String>,
    pub expire: Option<u64>,
}

/// Body of a records search limited to the external-identifier field
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub field_names: [&'a str; 1],
}

/// Body of the connectivity-probe search
#[derive(Debug, Serialize)]
pub(crate) struct ProbeRequest {
    pub page_size: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchData {
    #[serde(default)]
    pub items: Vec<SearchItem>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub page_token: Option<String>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub record_id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Body of a batch-create call
#[derive(Debug, Serialize)]
pub(crate) struct BatchCreateRequest<'a> {
    pub records: &'a [notebridge_domain::BitableRecord],
}
