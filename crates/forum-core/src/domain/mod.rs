//! Domain entities - the post aggregate and the records it is compared against.

mod category;
mod poll;
mod post;
mod reply;
mod revision;
mod user;

pub use category::Category;
pub use poll::{PollOption, PollVote};
pub use post::{AcceptedAnswer, NewPost, Post, PostStatus, Sticked};
pub use reply::{PostView, Reply};
pub use revision::Revision;
pub use user::UserRef;

/// Storage-assigned post identifier. `0` means "not yet assigned".
pub type PostId = u64;

/// User identifier. `0` never refers to a real user.
pub type UserId = u64;

/// Category identifier. `0` never refers to a real category.
pub type CategoryId = u64;

/// Seconds since the Unix epoch, UTC.
pub type Timestamp = i64;
