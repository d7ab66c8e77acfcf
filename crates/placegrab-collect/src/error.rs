use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("search failed for query '{query}': {source}")]
    Search {
        query: String,
        #[source]
        source: placegrab_places::PlacesError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
}
