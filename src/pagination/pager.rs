//! Cursor-following pager
//!
//! One pager per invocation: it owns its cursor, so pagers created from the
//! same client never interfere with each other.

use super::types::{Page, PaginationState};
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::JsonValue;
use futures::Stream;
use std::collections::VecDeque;
use std::pin::Pin;
use tracing::debug;

/// Type alias for the lazy record sequence returned by the `*_iter` operations
pub type RecordStream = Pin<Box<dyn Stream<Item = Result<JsonValue>> + Send>>;

/// Walks a paginated collection one page at a time
#[derive(Debug, Clone)]
pub struct Pager {
    http: HttpClient,
    state: PaginationState,
}

impl Pager {
    /// Create a pager starting at the given URL
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            state: PaginationState::new(url),
        }
    }

    /// Get the pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Fetch the next page of records
    ///
    /// Returns `Ok(None)` once the last page has been seen. After an error the
    /// pager is finished and issues no further requests.
    pub async fn next_page(&mut self) -> Result<Option<Vec<JsonValue>>> {
        let Some(url) = self.state.current_url().map(str::to_owned) else {
            return Ok(None);
        };

        let page = match self.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                self.state.mark_failed();
                return Err(e);
            }
        };

        let next = page.next_page();
        self.state.advance(next, page.results.len());
        debug!(
            page = self.state.pages_fetched,
            records = page.results.len(),
            done = self.state.is_finished(),
            "Fetched page"
        );

        Ok(Some(page.results))
    }

    /// Fetch every remaining page and return all records in order
    pub async fn collect_all(mut self) -> Result<Vec<JsonValue>> {
        let mut records = Vec::new();
        while let Some(page) = self.next_page().await? {
            records.extend(page);
        }

        debug!(
            "Pagination complete: {} records in {} pages",
            self.state.records_fetched, self.state.pages_fetched
        );
        Ok(records)
    }

    /// Turn this pager into a lazy stream of records
    ///
    /// Nothing is requested until the stream is first polled, and the next page
    /// is only requested once the previous page's records have all been yielded.
    /// The stream ends after yielding the first error.
    pub fn into_stream(self) -> RecordStream {
        let buffered = Buffered {
            pager: self,
            buffer: VecDeque::new(),
        };
        Box::pin(futures::stream::try_unfold(buffered, Buffered::next_record))
    }

    async fn fetch(&self, url: &str) -> Result<Page> {
        let body = self.http.get_json(url).await?;
        Page::from_value(body)
    }
}

/// Records of the current page not yet handed to the consumer
struct Buffered {
    pager: Pager,
    buffer: VecDeque<JsonValue>,
}

impl Buffered {
    async fn next_record(mut self) -> Result<Option<(JsonValue, Self)>> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Ok(Some((record, self)));
            }
            match self.pager.next_page().await? {
                Some(records) => self.buffer.extend(records),
                None => return Ok(None),
            }
        }
    }
}
