//! Pure policies deriving display facts from post state and a clock reading.
//!
//! Nothing here reads the wall clock; `now` is always passed in.

pub mod bounty;
pub mod humanize;
pub mod participants;
pub mod poll;

pub use bounty::{Bounty, BountyKind};

/// Length of the time units the policies reason in, in seconds.
pub const MINUTE: i64 = 60;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const MONTH: i64 = 30 * DAY;
