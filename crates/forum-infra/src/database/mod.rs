//! PostgreSQL-backed storage ports via SeaORM.

mod category_repo;
mod connections;
pub mod entity;
mod history_repo;

pub use category_repo::SeaOrmCategories;
pub use connections::{DatabaseConfig, connect};
pub use history_repo::SeaOrmRevisionHistory;

#[cfg(test)]
mod tests;
