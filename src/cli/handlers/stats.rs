use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_stats(ctx: &CommandContext, json: bool) -> Result<()> {
    let issues = ctx.client.list_issues()?;

    let pending = issues.iter().filter(|i| i.is_pending()).count();
    let resolved = issues.iter().filter(|i| i.is_resolved()).count();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "total": issues.len(),
                "pending": pending,
                "resolved": resolved,
            }))?
        );
    } else {
        println!("Total:    {}", issues.len());
        println!("Pending:  {}", pending.to_string().yellow());
        println!("Resolved: {}", resolved.to_string().green());
    }
    Ok(())
}
