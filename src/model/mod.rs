//! Data models for tweetql.
//!
//! - [`User`]: a read-only account with a derived full name
//! - [`Tweet`]: a short post that refers to its author by user ID

mod tweet;
mod user;

pub use tweet::Tweet;
pub use user::User;
pub(crate) use user::format_full_name;
