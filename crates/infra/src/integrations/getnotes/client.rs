//! Get Notes list client and paginator

use std::time::Duration;

use async_trait::async_trait;
use notebridge_core::NoteSource;
use notebridge_domain::constants::{DEFAULT_NOTES_SORT, INTER_PAGE_DELAY_MS, NOTES_PAGE_SIZE};
use notebridge_domain::{GetNotesConfig, Note, NoteBridgeError, Result};
use reqwest::Method;
use tracing::{debug, info};

use super::types::{NotesEnvelope, NotesPage};
use crate::http::HttpClient;

/// Client for the source note-taking service
pub struct GetNotesClient {
    base_url: String,
    token: String,
    http: HttpClient,
    page_delay: Duration,
}

impl GetNotesClient {
    /// Create a client from the source configuration
    pub fn new(config: &GetNotesConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            http: HttpClient::new()?,
            page_delay: Duration::from_millis(INTER_PAGE_DELAY_MS),
        })
    }

    /// Override the fixed inter-page delay (tests pass `Duration::ZERO`)
    #[must_use]
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Fetch one page of notes
    ///
    /// `since_id` is the cursor; an empty cursor means the first page.
    ///
    /// # Errors
    /// Any non-success response aborts with a `Network` error carrying the
    /// status and body.
    pub async fn list_page(&self, limit: u32, since_id: &str, sort: &str) -> Result<NotesPage> {
        let url = format!("{}/voicenotes/web/notes", self.base_url);

        let mut query = vec![("limit", limit.to_string())];
        if !since_id.is_empty() {
            query.push(("since_id", since_id.to_string()));
        }
        query.push(("sort", sort.to_string()));

        debug!(limit, since_id, "fetching notes page");

        let request =
            self.http.request(Method::GET, &url).query(&query).bearer_auth(&self.token);
        let response = self.http.send(request).await?;

        if !response.is_success() {
            return Err(NoteBridgeError::Network(format!(
                "notes list failed (HTTP {}): {}",
                response.status,
                response.body_display()
            )));
        }

        let envelope: NotesEnvelope = response.json()?;
        Ok(NotesPage {
            list: envelope.c.list,
            total_count: envelope.c.total_items,
            has_more: envelope.c.has_more,
        })
    }

    /// Fetch the complete note list, following the cursor until exhausted
    ///
    /// The next cursor is the pagination id of the last item on the current
    /// page. Paging stops when the service reports no more pages or the
    /// derived cursor is empty; an empty cursor on a `has_more` page would
    /// otherwise loop forever. The inter-page delay is skipped after the
    /// final page.
    pub async fn fetch_all(&self) -> Result<Vec<Note>> {
        info!("fetching all notes from source");

        let mut all_notes = Vec::new();
        let mut since_id = String::new();
        let mut page_no = 1u32;

        loop {
            let page = self.list_page(NOTES_PAGE_SIZE, &since_id, DEFAULT_NOTES_SORT).await?;

            since_id = page.list.last().map(Note::cursor_id).unwrap_or_default();

            debug!(page_no, fetched = page.list.len(), "notes page received");
            all_notes.extend(page.list);

            if !page.has_more || since_id.is_empty() {
                break;
            }

            page_no += 1;
            if !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        info!(total = all_notes.len(), "source notes fetched");
        Ok(all_notes)
    }
}

#[async_trait]
impl NoteSource for GetNotesClient {
    async fn fetch_all_notes(&self) -> Result<Vec<Note>> {
        self.fetch_all().await
    }
}
