use crate::graphql::TweetqlSchema;
use anyhow::{Context, Result};

/// Run one request against `schema` and print the JSON response.
pub(super) fn execute_and_print(
    schema: &TweetqlSchema,
    query: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if !response.errors.is_empty() {
        tracing::warn!(errors = response.errors.len(), "request completed with errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
