use thiserror::Error;

/// Errors returned by the Places API client and paginator.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 200 but with a non-success `status` field.
    #[error(
        "Places API returned {status} for {operation}: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    ApiStatus {
        operation: String,
        status: String,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// Guard against a provider that keeps handing out continuation tokens.
    #[error("pagination limit reached for query '{query}': exceeded {max_pages} pages")]
    PaginationLimit { query: String, max_pages: usize },
}
