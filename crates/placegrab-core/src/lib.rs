pub mod app_config;
pub mod config;
pub mod queries;
pub mod record;

pub use app_config::{AppConfig, SearchFailurePolicy};
pub use config::{load_app_config, queries_path_from_env};
pub use queries::{default_queries, load_queries, SearchQuery, DEFAULT_QUERIES};
pub use record::{OutputRecord, NOT_AVAILABLE};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read queries file {path}: {source}")]
    QueriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse queries file: {0}")]
    QueriesFileParse(#[from] serde_yaml::Error),

    #[error("queries validation failed: {0}")]
    Validation(String),
}
