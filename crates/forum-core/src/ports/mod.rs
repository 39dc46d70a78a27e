//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod category;
mod clock;
mod history;
mod related;

pub use cache::{CacheError, CacheInvalidation};
pub use category::CategoryLookup;
pub use clock::{Clock, FixedClock, SystemClock};
pub use history::RevisionHistoryStore;
pub use related::{CollectionQuery, RelatedCollectionProvider};
