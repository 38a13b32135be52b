//! Bitable record lister and batch writer

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notebridge_core::RecordStore;
use notebridge_domain::constants::{
    BATCH_CREATE_LIMIT, FIELD_NOTE_ID, INTER_BATCH_DELAY_MS, RECORDS_SEARCH_PAGE_SIZE,
};
use notebridge_domain::{
    BitableRecord, ChunkOutcome, FeishuConfig, ImportedRecord, NoteBridgeError, Result,
};
use reqwest::Method;
use tracing::{debug, error, info, warn};

use super::auth::TenantTokenProvider;
use super::types::{BatchCreateRequest, ProbeRequest, SearchItem, SearchRequest, SearchResponse};
use crate::http::HttpClient;

/// Client for one Bitable table
pub struct BitableClient {
    http: HttpClient,
    search_url: String,
    batch_create_url: String,
    tokens: Arc<TenantTokenProvider>,
    page_size: u32,
    batch_limit: usize,
    batch_delay: Duration,
}

impl BitableClient {
    /// Create a client bound to the configured app token and table id
    pub fn new(config: &FeishuConfig, tokens: Arc<TenantTokenProvider>) -> Result<Self> {
        let table_base = format!(
            "{}/bitable/v1/apps/{}/tables/{}",
            config.base_url.trim_end_matches('/'),
            config.app_token,
            config.table_id
        );

        Ok(Self {
            http: HttpClient::new()?,
            search_url: format!("{table_base}/records/search"),
            batch_create_url: format!("{table_base}/records/batch_create"),
            tokens,
            page_size: RECORDS_SEARCH_PAGE_SIZE,
            batch_limit: BATCH_CREATE_LIMIT,
            batch_delay: Duration::from_millis(INTER_BATCH_DELAY_MS),
        })
    }

    /// Override the chunk size (tests exercise chunking with small limits)
    #[must_use]
    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        self.batch_limit = limit.max(1);
        self
    }

    /// Override the fixed inter-chunk delay (tests pass `Duration::ZERO`)
    #[must_use]
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// List the note identifiers already present in the table
    ///
    /// Pages through the search endpoint reading only the note-id column,
    /// following `has_more`/`page_token` until exhausted. Rows without a
    /// readable note id are skipped with a warning.
    pub async fn list_known_ids(&self) -> Result<Vec<ImportedRecord>> {
        info!("listing known note ids from destination");

        let token = self.tokens.get_token().await?;
        let mut records = Vec::new();
        let mut page_token = String::new();

        loop {
            let mut query = vec![("page_size", self.page_size.to_string())];
            if !page_token.is_empty() {
                query.push(("page_token", page_token.clone()));
            }

            let request = self
                .http
                .request(Method::POST, &self.search_url)
                .query(&query)
                .bearer_auth(&token)
                .json(&SearchRequest { field_names: [FIELD_NOTE_ID] });
            let data = self.execute_search(request).await?;

            for item in data.items {
                match note_id_text(&item) {
                    Some(note_id) => {
                        records.push(ImportedRecord { note_id, record_id: item.record_id });
                    }
                    None => {
                        warn!(record_id = %item.record_id, "row has no readable note id, skipping");
                    }
                }
            }

            if !data.has_more {
                break;
            }
            page_token = data.page_token.unwrap_or_default();
            if page_token.is_empty() {
                warn!("destination reported more pages without a page token, stopping");
                break;
            }
        }

        info!(known = records.len(), "destination rows listed");
        Ok(records)
    }

    /// Create records in sequential chunks of at most the batch limit
    ///
    /// Each chunk is posted once. A failed chunk is logged with the full
    /// response detail and recorded in its outcome; later chunks still run.
    /// The inter-chunk delay is omitted after the last chunk.
    pub async fn batch_create(&self, records: &[BitableRecord]) -> Result<Vec<ChunkOutcome>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let token = self.tokens.get_token().await?;
        let chunk_count = records.len().div_ceil(self.batch_limit);
        info!(records = records.len(), chunks = chunk_count, "importing records");

        let mut outcomes = Vec::with_capacity(chunk_count);
        for (index, chunk) in records.chunks(self.batch_limit).enumerate() {
            debug!(chunk = index + 1, size = chunk.len(), "posting batch-create chunk");

            let outcome_error = match self.post_chunk(&token, chunk).await {
                Ok(()) => None,
                Err(err) => {
                    error!(chunk = index + 1, error = %err, "batch create failed, continuing");
                    Some(err.to_string())
                }
            };
            outcomes.push(ChunkOutcome { index, records: chunk.len(), error: outcome_error });

            if index + 1 < chunk_count && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        let imported: usize =
            outcomes.iter().filter(|o| o.is_success()).map(|o| o.records).sum();
        info!(imported, "batch import finished");
        Ok(outcomes)
    }

    /// Connectivity probe: one single-row search
    ///
    /// Returns the table's total record count.
    pub async fn probe(&self) -> Result<u64> {
        let token = self.tokens.get_token().await?;
        let request = self
            .http
            .request(Method::POST, &self.search_url)
            .bearer_auth(&token)
            .json(&ProbeRequest { page_size: 1 });
        let data = self.execute_search(request).await?;
        Ok(data.total)
    }

    async fn execute_search(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<super::types::SearchData> {
        let response = self.http.send(request).await?;

        if !response.is_success() {
            return Err(NoteBridgeError::Network(format!(
                "record search failed (HTTP {}): {}",
                response.status,
                response.body_display()
            )));
        }

        let body: SearchResponse = response.json()?;
        if body.code != 0 {
            return Err(NoteBridgeError::Network(format!(
                "record search rejected (code {}): {}",
                body.code, body.msg
            )));
        }
        body.data.ok_or_else(|| {
            NoteBridgeError::Internal("search response missing data field".to_string())
        })
    }

    async fn post_chunk(&self, token: &str, chunk: &[BitableRecord]) -> Result<()> {
        let request = self
            .http
            .request(Method::POST, &self.batch_create_url)
            .bearer_auth(token)
            .json(&BatchCreateRequest { records: chunk });
        let response = self.http.send(request).await?;

        if !response.is_success() {
            return Err(NoteBridgeError::Network(format!(
                "batch create failed (HTTP {}): {}",
                response.status,
                response.body_display()
            )));
        }
        Ok(())
    }
}

/// First text segment of the note-id column, if the row has one
fn note_id_text(item: &SearchItem) -> Option<String> {
    item.fields
        .get(FIELD_NOTE_ID)?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
        .map(ToString::to_string)
}

#[async_trait]
impl RecordStore for BitableClient {
    async fn list_known_ids(&self) -> Result<Vec<ImportedRecord>> {
        self.list_known_ids().await
    }

    async fn batch_create(&self, records: Vec<BitableRecord>) -> Result<Vec<ChunkOutcome>> {
        self.batch_create(&records).await
    }
}
