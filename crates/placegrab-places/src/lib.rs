pub mod client;
pub mod error;
pub mod pagination;
pub mod provider;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use pagination::{SearchPaginator, Sleeper, TokioSleeper, MAX_PAGES};
pub use provider::{PlacesProvider, DETAIL_FIELDS};
pub use types::{Geometry, Location, PlaceDetail, PlaceSummary, SearchPage};
