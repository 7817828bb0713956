//! GraphQL schema, resolvers and HTTP server for tweetql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on http://localhost:4000)
//! tweetql serve --port 4000
//!
//! # Execute a query from CLI
//! tweetql query '{ allTweets { id text author { fullName } } }'
//!
//! # Execute a mutation from CLI
//! tweetql mutate 'postTweet(text: "hi", userId: "1") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `allUsers`, `allTweets`, `tweet`
//! - **Mutations**: `postTweet`, `deleteTweet`
//! - **Derived fields**: `User.fullName`, `Tweet.author`
//!
//! `tweet` and `Tweet.author` are nullable: an unknown tweet ID or a
//! dangling `userId` resolve to `null` rather than an error.

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, TweetqlSchema, build_schema};
pub use server::{router, run_server};
pub use types::*;
