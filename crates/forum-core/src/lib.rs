//! # Forum Core
//!
//! The domain layer for discussion-forum posts.
//! This crate holds the post aggregate, the pure policies derived from it
//! (ages, bounties, polls) and the revision comparator. Storage, caches and
//! clocks are reached only through the traits in [`ports`].

pub mod diff;
pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod service;

pub use diff::{DiffRow, SideBySideDiff};
pub use error::DomainError;
pub use service::{PolicyConfig, PostService};
