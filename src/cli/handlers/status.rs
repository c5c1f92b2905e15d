use crate::error::CivicError;
use crate::model::IssueStatus;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::format_status;

/// Generic status update handler: verify the id against the current
/// snapshot, patch the store, then apply the same change to the local copy.
fn update_status(ctx: &CommandContext, id: &str, new_status: IssueStatus, json: bool) -> Result<()> {
    ctx.client.ensure_admin()?;

    let issues = ctx.client.list_issues()?;
    let mut issue = issues
        .into_iter()
        .find(|i| i.id == id)
        .ok_or_else(|| CivicError::NotFound(id.to_string()))?;

    ctx.client.update_status(id, new_status)?;
    issue.status = new_status;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        let action = match new_status {
            IssueStatus::Resolved => "Resolved".green(),
            IssueStatus::Pending => "Reopened".yellow(),
        };
        println!(
            "{} {} is now {}",
            action,
            issue.id.cyan(),
            format_status(new_status)
        );
    }

    Ok(())
}

/// Handle resolve command (set status to Resolved)
pub fn handle_resolve(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    update_status(ctx, &id, IssueStatus::Resolved, json)
}

/// Handle reopen command (set status to Pending)
pub fn handle_reopen(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    update_status(ctx, &id, IssueStatus::Pending, json)
}
