//! Configuration loader
//!
//! Loads application configuration from environment variables.
//!
//! ## Environment Variables
//! - `GET_NOTES_TOKEN`: Bearer token for the source notes API (required)
//! - `FEISHU_APP_ID`: Feishu application id (required)
//! - `FEISHU_APP_SECRET`: Feishu application secret (required)
//! - `FEISHU_APP_TOKEN`: Bitable application token (required)
//! - `FEISHU_TABLE_ID`: Bitable table identifier (required)
//! - `GET_NOTES_BASE_URL`: Source base URL override (optional)
//! - `FEISHU_BASE_URL`: Destination base URL override (optional)
//!
//! Any missing required variable fails with a `Config` error naming it,
//! before any network call is made.

use notebridge_domain::constants::{FEISHU_BASE_URL, GET_NOTES_BASE_URL};
use notebridge_domain::{Config, FeishuConfig, GetNotesConfig, NoteBridgeError, Result};

/// Load configuration from environment variables
///
/// # Errors
/// Returns `NoteBridgeError::Config` if a required variable is missing.
pub fn load_from_env() -> Result<Config> {
    let token = env_var("GET_NOTES_TOKEN")?;
    let app_id = env_var("FEISHU_APP_ID")?;
    let app_secret = env_var("FEISHU_APP_SECRET")?;
    let app_token = env_var("FEISHU_APP_TOKEN")?;
    let table_id = env_var("FEISHU_TABLE_ID")?;

    Ok(Config {
        get_notes: GetNotesConfig {
            token,
            base_url: env_or("GET_NOTES_BASE_URL", GET_NOTES_BASE_URL),
        },
        feishu: FeishuConfig {
            app_id,
            app_secret,
            app_token,
            table_id,
            base_url: env_or("FEISHU_BASE_URL", FEISHU_BASE_URL),
        },
    })
}

/// Get required environment variable
///
/// # Errors
/// Returns `NoteBridgeError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        NoteBridgeError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Environment variable with a default for when it is unset or empty
fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
