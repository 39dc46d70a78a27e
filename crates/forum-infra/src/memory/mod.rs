//! In-memory implementations of the storage ports.
//!
//! These back tests and the inspection tool. Works within a single process only.

mod categories;
mod history;
mod related;

pub use categories::InMemoryCategories;
pub use history::InMemoryRevisionHistory;
pub use related::InMemoryRelatedCollections;
