use anyhow::Result;

use super::CommandContext;
use super::utils::execute_and_print;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute_and_print(&ctx.schema(), &query, variables)
}
