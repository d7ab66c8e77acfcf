pub mod driver;
pub mod enrich;
pub mod error;
pub mod flatten;
pub mod writer;

pub use driver::{collect_all, CategoryOutcome, CollectOptions, Collection};
pub use enrich::fetch_detail_or_empty;
pub use error::CollectError;
pub use flatten::flatten_detail;
pub use writer::{write_csv, write_records};
