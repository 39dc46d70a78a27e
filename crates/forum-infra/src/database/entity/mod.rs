//! SeaORM entities for the tables the adapters read.

pub mod category;
pub mod post_history;
