use crate::map::{PlacedIssue, map_center, place_issues};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::format_status;

pub fn handle_map(ctx: &CommandContext, all: bool, json: bool) -> Result<()> {
    let mut issues = ctx.client.list_issues()?;
    let center = map_center(&issues);

    // The map hides resolved issues unless asked otherwise.
    if !all {
        issues.retain(|i| i.is_pending());
    }

    let placed = place_issues(issues);

    if json {
        let markers: Vec<_> = placed
            .iter()
            .map(|p| {
                serde_json::json!({
                    "issue": p.issue,
                    "displayLocation": p.display,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "center": center,
                "markers": markers,
            }))?
        );
    } else {
        print_markers(&placed);
    }
    Ok(())
}

fn print_markers(placed: &[PlacedIssue]) {
    if placed.is_empty() {
        println!("No markers to place.");
        return;
    }

    for p in placed {
        let moved = p.display != p.issue.location;
        let marker = if moved {
            format!(
                "-> {}, {}",
                p.display.lat, p.display.lng
            )
            .yellow()
        } else {
            "at stored location".dimmed()
        };
        println!(
            "{} {} [{}] {}, {} {}",
            p.issue.id.cyan(),
            format_status(p.issue.status),
            p.issue.category.to_string().blue(),
            p.issue.location.lat,
            p.issue.location.lng,
            marker
        );
    }
}
