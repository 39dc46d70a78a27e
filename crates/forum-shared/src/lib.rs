//! # Forum Shared
//!
//! Presentation types for post pages, free of domain dependencies.
//! In a full-stack Rust setup, this crate is compiled for both server and WASM.

pub mod dto;

pub use dto::{BountyView, DiffRowView, DiffView, PostSummary, UserView};
