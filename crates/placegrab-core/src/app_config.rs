use std::path::PathBuf;

/// What the category driver does when a search page request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFailurePolicy {
    /// Propagate the error and halt the whole run before anything is written.
    #[default]
    Abort,
    /// Log the error, keep what the category produced so far, and move on.
    Skip,
}

impl std::fmt::Display for SearchFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchFailurePolicy::Abort => write!(f, "abort"),
            SearchFailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for SearchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(SearchFailurePolicy::Abort),
            "skip" => Ok(SearchFailurePolicy::Skip),
            other => Err(format!("expected \"abort\" or \"skip\", got \"{other}\"")),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub api_base_url: String,
    pub output_path: PathBuf,
    pub queries_path: Option<PathBuf>,
    pub page_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub on_search_error: SearchFailurePolicy,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("output_path", &self.output_path)
            .field("queries_path", &self.queries_path)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("on_search_error", &self.on_search_error)
            .field("log_level", &self.log_level)
            .finish()
    }
}
