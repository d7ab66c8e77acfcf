//! The seam between the collection pipeline and the remote Places service.

use async_trait::async_trait;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::{PlaceDetail, SearchPage};

/// Field projection requested for every detail lookup.
pub const DETAIL_FIELDS: [&str; 5] = [
    "name",
    "formatted_phone_number",
    "website",
    "geometry",
    "formatted_address",
];

/// A places search provider: paged text search plus per-place details.
///
/// [`PlacesClient`] is the production implementation; tests supply fakes.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Fetches one page of hits for `query`, continuing from `page_token`
    /// when given.
    async fn search(&self, query: &str, page_token: Option<&str>)
        -> Result<SearchPage, PlacesError>;

    /// Fetches `fields` for the place identified by `place_id`.
    async fn details(&self, place_id: &str, fields: &[&str]) -> Result<PlaceDetail, PlacesError>;
}

#[async_trait]
impl PlacesProvider for PlacesClient {
    async fn search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        self.text_search(query, page_token).await
    }

    async fn details(&self, place_id: &str, fields: &[&str]) -> Result<PlaceDetail, PlacesError> {
        self.place_details(place_id, fields).await
    }
}
