use anyhow::Result;

use super::CommandContext;
use super::utils::execute_and_print;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { } unless a full operation was given
    let query = if mutation.trim_start().starts_with("mutation") {
        mutation
    } else {
        format!("mutation {{ {} }}", mutation)
    };
    execute_and_print(&ctx.schema(), &query, variables)
}
