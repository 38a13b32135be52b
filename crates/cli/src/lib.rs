//! Shared wiring for the NoteBridge binaries
//!
//! Both entry points initialize logging the same way and build their clients
//! from the same environment-driven [`AppContext`].

use std::sync::Arc;

use notebridge_core::{NoteSource, RecordStore, SyncService};
use notebridge_domain::{Config, Result};
use notebridge_infra::config::load_from_env;
use notebridge_infra::integrations::bitable::{BitableClient, TenantTokenProvider};
use notebridge_infra::integrations::getnotes::GetNotesClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing and load `.env` (best effort)
///
/// Logging comes up first so the `.env` load itself is visible. `RUST_LOG`
/// controls the filter; the default level is `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(_) => debug!("no .env file found"),
    }
}

/// Configuration plus the wired service clients
pub struct AppContext {
    config: Config,
    source: Arc<GetNotesClient>,
    store: Arc<BitableClient>,
}

impl AppContext {
    /// Build the full context from environment variables
    ///
    /// Fails with a `Config` error, before any network call, when a required
    /// variable is missing.
    pub fn from_env() -> Result<Self> {
        let config = load_from_env()?;
        let source = Arc::new(GetNotesClient::new(&config.get_notes)?);
        let tokens = Arc::new(TenantTokenProvider::new(&config.feishu)?);
        let store = Arc::new(BitableClient::new(&config.feishu, tokens)?);

        Ok(Self { config, source, store })
    }

    /// The loaded configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The source notes client
    #[must_use]
    pub fn source(&self) -> &GetNotesClient {
        &self.source
    }

    /// The destination table client
    #[must_use]
    pub fn store(&self) -> &BitableClient {
        &self.store
    }

    /// The sync orchestrator over the wired clients
    #[must_use]
    pub fn sync_service(&self) -> SyncService {
        SyncService::new(
            self.source.clone() as Arc<dyn NoteSource>,
            self.store.clone() as Arc<dyn RecordStore>,
        )
    }
}
