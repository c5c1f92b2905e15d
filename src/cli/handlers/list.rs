use crate::cli::commands::{CategoryArg, StatusArg};
use crate::model::{Category, IssueStatus};
use anyhow::Result;

use super::CommandContext;
use super::utils::print_issue_list;

/// Parameters for list operation
pub struct ListParams {
    pub status: Option<StatusArg>,
    pub category: Option<CategoryArg>,
    pub json: bool,
}

pub fn handle_list(ctx: &CommandContext, params: ListParams) -> Result<()> {
    let mut issues = ctx.client.list_issues()?;

    // Filters mirror the dashboard's chips: applied client-side against the
    // freshly fetched snapshot.
    if let Some(s) = params.status {
        let filter_status: IssueStatus = s.into();
        issues.retain(|i| i.status == filter_status);
    }
    if let Some(c) = params.category {
        let filter_category: Category = c.into();
        issues.retain(|i| i.category == filter_category);
    }

    if params.json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else {
        print_issue_list(&issues);
    }
    Ok(())
}
