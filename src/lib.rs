//! # tweetql - a tiny in-memory GraphQL API
//!
//! tweetql serves two collections, users and tweets, over GraphQL. Data is
//! held in process memory, seeded with fixed rows at startup, and lost on
//! exit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API with GraphiQL on http://localhost:4000
//! tweetql serve
//!
//! # One-shot query against a fresh store
//! tweetql query '{ allTweets { id text author { fullName } } }'
//!
//! # Print the schema
//! tweetql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (User, Tweet)
//! - [`storage`]: The in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.tweetql.yml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `TweetqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that hosts it.
pub mod graphql;

/// Data models: `User` and `Tweet`.
pub mod model;

/// In-memory storage layer.
pub mod storage;

/// Logging setup using tracing.
///
/// Compact stderr output plus an optional JSON log file.
pub mod logging;
