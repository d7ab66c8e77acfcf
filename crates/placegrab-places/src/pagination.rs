//! Token-based pagination over the text-search endpoint.
//!
//! The provider hands out a `next_page_token` while more results exist. A
//! fresh token is not valid straight away, so every request after the first
//! waits a fixed delay before it is sent.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::PlacesError;
use crate::provider::PlacesProvider;
use crate::types::PlaceSummary;

/// Maximum number of pages fetched for one query before giving up.
/// Prevents infinite loops on a provider that cycles tokens.
pub const MAX_PAGES: usize = 50;

/// Blocking wait between page requests, injectable for tests.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug)]
enum PageState {
    Start,
    Next(String),
    Done,
}

/// Lazily walks every result page of a single query.
///
/// Each call to [`SearchPaginator::next_page`] issues at most one search
/// request. The sequence ends after a response without a continuation token,
/// or after the first error; it cannot be restarted.
pub struct SearchPaginator<'a, P: ?Sized, S: ?Sized> {
    provider: &'a P,
    sleeper: &'a S,
    query: String,
    page_delay: Duration,
    state: PageState,
    pages_fetched: usize,
}

impl<'a, P, S> SearchPaginator<'a, P, S>
where
    P: PlacesProvider + ?Sized,
    S: Sleeper + ?Sized,
{
    #[must_use]
    pub fn new(provider: &'a P, sleeper: &'a S, query: &str, page_delay: Duration) -> Self {
        Self {
            provider,
            sleeper,
            query: query.to_owned(),
            page_delay,
            state: PageState::Start,
            pages_fetched: 0,
        }
    }

    /// Number of search requests that returned successfully so far.
    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetches the next page of hits, or `Ok(None)` once the provider has
    /// stopped returning continuation tokens.
    ///
    /// # Errors
    ///
    /// Propagates any [`PlacesError`] from the provider, and returns
    /// [`PlacesError::PaginationLimit`] if more than [`MAX_PAGES`] pages would
    /// be requested. The paginator is exhausted after an error.
    pub async fn next_page(&mut self) -> Result<Option<Vec<PlaceSummary>>, PlacesError> {
        let token = match std::mem::replace(&mut self.state, PageState::Done) {
            PageState::Done => return Ok(None),
            PageState::Start => None,
            PageState::Next(token) => {
                if self.pages_fetched >= MAX_PAGES {
                    return Err(PlacesError::PaginationLimit {
                        query: self.query.clone(),
                        max_pages: MAX_PAGES,
                    });
                }
                if !self.page_delay.is_zero() {
                    self.sleeper.sleep(self.page_delay).await;
                }
                Some(token)
            }
        };

        let page = self.provider.search(&self.query, token.as_deref()).await?;
        self.pages_fetched += 1;

        tracing::debug!(
            query = %self.query,
            page = self.pages_fetched,
            hits = page.results.len(),
            has_next = page.next_page_token.is_some(),
            "fetched search page"
        );

        if let Some(next) = page.next_page_token {
            self.state = PageState::Next(next);
        }

        Ok(Some(page.results))
    }
}
