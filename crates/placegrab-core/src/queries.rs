use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Separator between the category and the locale in a search query.
const CATEGORY_SEPARATOR: &str = " in ";

/// Queries used when no queries file is configured.
pub const DEFAULT_QUERIES: [&str; 3] = [
    "Hospitals in Kathmandu Valley",
    "Police Stations in Kathmandu Valley",
    "Ambulance Service in Kathmandu Valley",
];

/// A text-search query naming a category and a locale, e.g.
/// `"Hospitals in Kathmandu Valley"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category label: everything before the first `" in "`.
    ///
    /// A query without the separator is its own label.
    #[must_use]
    pub fn category(&self) -> &str {
        self.0
            .split_once(CATEGORY_SEPARATOR)
            .map_or(self.0.as_str(), |(prefix, _)| prefix)
            .trim()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[must_use]
pub fn default_queries() -> Vec<SearchQuery> {
    DEFAULT_QUERIES.iter().copied().map(SearchQuery::new).collect()
}

#[derive(Debug, Deserialize)]
pub struct QueriesFile {
    pub queries: Vec<SearchQuery>,
}

/// Load and validate the query list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_queries(path: &Path) -> Result<Vec<SearchQuery>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::QueriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let queries_file: QueriesFile = serde_yaml::from_str(&content)?;

    validate_queries(&queries_file.queries)?;

    Ok(queries_file.queries)
}

fn validate_queries(queries: &[SearchQuery]) -> Result<(), ConfigError> {
    if queries.is_empty() {
        return Err(ConfigError::Validation(
            "at least one query is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for query in queries {
        if query.as_str().trim().is_empty() {
            return Err(ConfigError::Validation(
                "query text must be non-empty".to_string(),
            ));
        }

        if !seen.insert(query.as_str().trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate query: '{query}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn category_is_prefix_before_in() {
        let q = SearchQuery::new("Hospitals in Kathmandu Valley");
        assert_eq!(q.category(), "Hospitals");
    }

    #[test]
    fn category_splits_on_first_separator_only() {
        let q = SearchQuery::new("Police Stations in Lalitpur in Kathmandu Valley");
        assert_eq!(q.category(), "Police Stations");
    }

    #[test]
    fn category_without_separator_is_whole_query() {
        let q = SearchQuery::new("Blood Banks ");
        assert_eq!(q.category(), "Blood Banks");
    }

    #[test]
    fn category_does_not_split_inside_words() {
        // "in" only counts as a separator when surrounded by spaces
        let q = SearchQuery::new("Clinics");
        assert_eq!(q.category(), "Clinics");
    }

    #[test]
    fn default_queries_keep_declared_order() {
        let labels: Vec<String> = default_queries()
            .iter()
            .map(|q| q.category().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["Hospitals", "Police Stations", "Ambulance Service"]
        );
    }

    #[test]
    fn load_queries_reads_yaml_list() {
        let file = write_yaml("queries:\n  - Hospitals in Pokhara\n  - Fire Stations in Pokhara\n");
        let queries = load_queries(file.path()).expect("valid queries file");
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].as_str(), "Fire Stations in Pokhara");
        assert_eq!(queries[1].category(), "Fire Stations");
    }

    #[test]
    fn load_queries_rejects_empty_list() {
        let file = write_yaml("queries: []\n");
        let err = load_queries(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
    }

    #[test]
    fn load_queries_rejects_blank_entry() {
        let file = write_yaml("queries:\n  - \"  \"\n");
        let err = load_queries(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
    }

    #[test]
    fn load_queries_rejects_case_insensitive_duplicates() {
        let file = write_yaml("queries:\n  - Hospitals in Pokhara\n  - hospitals in pokhara\n");
        let err = load_queries(file.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
            "got: {err:?}"
        );
    }

    #[test]
    fn load_queries_reports_missing_file() {
        let err = load_queries(Path::new("/nonexistent/queries.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::QueriesFileIo { .. }), "got: {err:?}");
    }

    #[test]
    fn load_queries_reports_malformed_yaml() {
        let file = write_yaml("queries: [unterminated\n");
        let err = load_queries(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::QueriesFileParse(_)), "got: {err:?}");
    }

    #[test]
    fn bundled_queries_file_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("queries.yaml");
        assert!(
            path.exists(),
            "queries.yaml missing at {path:?}, required for this test"
        );
        let queries = load_queries(&path).expect("bundled queries.yaml should be valid");
        assert_eq!(queries, default_queries());
    }
}
