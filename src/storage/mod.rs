//! In-memory storage for tweetql.
//!
//! Both collections live in a single [`Store`], which is the only place
//! tweets are appended or removed. The server shares it as a
//! [`SharedStore`] (`Arc<RwLock<Store>>`): resolvers take a read guard for
//! queries and a write guard for mutations.
//!
//! Nothing is persisted; state resets on every process start.

mod store;

pub use store::{SharedStore, Store};
