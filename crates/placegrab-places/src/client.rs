//! HTTP client for the Places Web Service.
//!
//! Wraps `reqwest` with API key handling, status-envelope checks, and typed
//! response deserialization. Both endpoints check the `"status"` field and
//! surface non-success values as [`PlacesError::ApiStatus`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsResponse, PlaceDetail, SearchPage, TextSearchResponse};

const TEXT_SEARCH_PATH: &str = "maps/api/place/textsearch/json";
const DETAILS_PATH: &str = "maps/api/place/details/json";

/// Client for the Places text-search and details endpoints.
///
/// The base URL is always supplied by the caller: configuration owns the
/// production default, and tests point it at a mock server.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends the endpoint path
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one page of text-search results.
    ///
    /// The first page is requested with `page_token = None`; later pages pass
    /// the `next_page_token` from the previous response. `OK` and
    /// `ZERO_RESULTS` are both treated as success.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] for any other `status` value.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let mut params = vec![("query", query)];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let url = self.build_url(TEXT_SEARCH_PATH, &params)?;
        let operation = format!("textsearch(query={query})");
        let body = self.request_json(url, &operation).await?;

        let response: TextSearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: operation.clone(),
                source: e,
            })?;

        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(SearchPage::from(response)),
            _ => Err(PlacesError::ApiStatus {
                operation,
                status: response.status,
                message: response.error_message,
            }),
        }
    }

    /// Fetches the requested `fields` for one place.
    ///
    /// An `OK` response without a `result` object yields an empty
    /// [`PlaceDetail`].
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if `status` is not `OK` (e.g. `NOT_FOUND`).
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetail, PlacesError> {
        let fields = fields.join(",");
        let url = self.build_url(
            DETAILS_PATH,
            &[("place_id", place_id), ("fields", fields.as_str())],
        )?;
        let operation = format!("details(place_id={place_id})");
        let body = self.request_json(url, &operation).await?;

        let response: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: operation.clone(),
                source: e,
            })?;

        if response.status != "OK" {
            return Err(PlacesError::ApiStatus {
                operation,
                status: response.status,
                message: response.error_message,
            });
        }

        Ok(response.result.unwrap_or_default())
    }

    /// Builds the endpoint URL with percent-encoded query parameters and the
    /// API key appended last.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body as
    /// JSON.
    ///
    /// URLs are stripped from transport errors since they carry the API key.
    async fn request_json(
        &self,
        url: Url,
        operation: &str,
    ) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| PlacesError::Http(e.without_url()))?;
        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::Http(e.without_url()))?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: operation.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
