use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tweetql")]
#[command(
    author,
    version,
    about = "A tiny in-memory GraphQL API for tweets and users"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .tweetql.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .tweetql.yml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "TWEETQL_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "TWEETQL_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against a freshly seeded store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against a freshly seeded store
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
