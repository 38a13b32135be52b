//! Configuration structures
//!
//! Runtime configuration for both external services. Values are loaded from
//! environment variables by `notebridge-infra`; this crate only defines the
//! shapes.

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub get_notes: GetNotesConfig,
    pub feishu: FeishuConfig,
}

/// Source service (Get Notes) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNotesConfig {
    /// Bearer token for the notes API
    pub token: String,
    /// API base URL (overridable for tests)
    pub base_url: String,
}

/// Destination service (Feishu Bitable) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeishuConfig {
    pub app_id: String,
    pub app_secret: String,
    /// Bitable application token
    pub app_token: String,
    /// Table identifier inside the Bitable app
    pub table_id: String,
    /// Open API base URL (overridable for tests)
    pub base_url: String,
}
