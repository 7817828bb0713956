//! Command-line interface for tweetql.
//!
//! [`commands`] holds the clap definitions; [`handlers`] runs them.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
