//! # Forum Infrastructure
//!
//! Concrete implementations of the ports defined in `forum-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - Revision history and categories in PostgreSQL via SeaORM
//! - `redis` - Redis-backed view cache

pub mod cache;
pub mod memory;
pub mod observer;

#[cfg(feature = "postgres")]
pub mod database;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use memory::{InMemoryCategories, InMemoryRelatedCollections, InMemoryRevisionHistory};
pub use observer::TracingObserver;

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use cache::{RedisCache, RedisConfig};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, SeaOrmCategories, SeaOrmRevisionHistory};
