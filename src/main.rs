use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use tweetql::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use tweetql::cli::{Cli, Commands};
use tweetql::config::TweetqlConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tweetql::logging::init(cli.verbose, cli.log_file);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => handle_init(force),
        Commands::Serve { host, port } => handle_serve(load_context(config_path)?, host, port),
        Commands::Query { query, variables } => {
            handle_query(load_context(config_path)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load_context(config_path)?, mutation, variables),
        Commands::Schema => handle_schema(load_context(config_path)?),
    }
}

fn load_context(config_path: Option<&Path>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let config = TweetqlConfig::load(&cwd, config_path)
        .context("Failed to load tweetql configuration")?;
    Ok(CommandContext::new(config))
}
