//! Category driver: runs every query through search, enrichment, and
//! flattening, in declared order, into one shared result set.

use std::time::Duration;

use placegrab_core::{OutputRecord, SearchFailurePolicy, SearchQuery};
use placegrab_places::{PlacesError, PlacesProvider, SearchPaginator, Sleeper};

use crate::enrich::fetch_detail_or_empty;
use crate::error::CollectError;
use crate::flatten::flatten_detail;

#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    /// Wait before each follow-up page request.
    pub page_delay: Duration,
    pub on_search_error: SearchFailurePolicy,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            page_delay: Duration::from_secs(2),
            on_search_error: SearchFailurePolicy::Abort,
        }
    }
}

/// What one query contributed to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub query: String,
    pub category: String,
    pub pages: usize,
    pub records: usize,
    /// Set when a search request failed and the category was skipped.
    pub error: Option<String>,
}

/// Every record collected in order, plus a per-query breakdown.
#[derive(Debug, Default)]
pub struct Collection {
    pub records: Vec<OutputRecord>,
    pub categories: Vec<CategoryOutcome>,
}

impl Collection {
    /// Queries whose search failed under [`SearchFailurePolicy::Skip`].
    pub fn skipped(&self) -> impl Iterator<Item = &CategoryOutcome> {
        self.categories.iter().filter(|c| c.error.is_some())
    }
}

/// Runs every query in order and accumulates all records.
///
/// Detail lookup failures never stop the run. A failed search request is
/// handled per `options.on_search_error`: under `Abort` the error is returned
/// and everything collected so far is dropped; under `Skip` the rows the
/// category already produced are kept and the next query starts.
///
/// # Errors
///
/// Returns [`CollectError::Search`] for the first failed search request when
/// the policy is [`SearchFailurePolicy::Abort`].
pub async fn collect_all<P, S>(
    provider: &P,
    sleeper: &S,
    queries: &[SearchQuery],
    options: &CollectOptions,
) -> Result<Collection, CollectError>
where
    P: PlacesProvider + ?Sized,
    S: Sleeper + ?Sized,
{
    let mut collection = Collection::default();

    for query in queries {
        let category = query.category();
        tracing::info!(query = %query, category, "starting category");

        let before = collection.records.len();
        let mut paginator =
            SearchPaginator::new(provider, sleeper, query.as_str(), options.page_delay);
        let result =
            collect_category(provider, &mut paginator, category, &mut collection.records).await;
        let records = collection.records.len() - before;
        let pages = paginator.pages_fetched();

        let error = match result {
            Ok(()) => None,
            Err(source) => match options.on_search_error {
                SearchFailurePolicy::Abort => {
                    return Err(CollectError::Search {
                        query: query.to_string(),
                        source,
                    });
                }
                SearchFailurePolicy::Skip => {
                    tracing::error!(
                        query = %query,
                        error = %source,
                        kept_records = records,
                        "search failed, skipping rest of category"
                    );
                    Some(source.to_string())
                }
            },
        };

        tracing::info!(category, pages, records, "finished category");
        collection.categories.push(CategoryOutcome {
            query: query.to_string(),
            category: category.to_owned(),
            pages,
            records,
            error,
        });
    }

    Ok(collection)
}

/// Drains one query's pages, appending a record per hit as it goes.
async fn collect_category<P, S>(
    provider: &P,
    paginator: &mut SearchPaginator<'_, P, S>,
    category: &str,
    records: &mut Vec<OutputRecord>,
) -> Result<(), PlacesError>
where
    P: PlacesProvider + ?Sized,
    S: Sleeper + ?Sized,
{
    while let Some(hits) = paginator.next_page().await? {
        for hit in hits {
            let detail = fetch_detail_or_empty(provider, &hit.place_id).await;
            let record = flatten_detail(detail, category, &hit.place_id);
            tracing::info!(
                category,
                place_id = %record.place_id,
                name = record.name.as_deref().unwrap_or("<unknown>"),
                "fetched place"
            );
            records.push(record);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
