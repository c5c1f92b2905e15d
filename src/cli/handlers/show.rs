use crate::error::CivicError;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_issue;

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    // The store exposes no single-issue endpoint; fetch the list and match
    // by identifier.
    let issues = ctx.client.list_issues()?;
    let issue = issues
        .into_iter()
        .find(|i| i.id == id)
        .ok_or(CivicError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        print_issue(&issue);
    }
    Ok(())
}
