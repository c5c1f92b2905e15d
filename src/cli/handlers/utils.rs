use crate::model::{Issue, IssueStatus};
use colored::{ColoredString, Colorize};

pub fn format_status(status: IssueStatus) -> ColoredString {
    match status {
        IssueStatus::Pending => "Pending".yellow(),
        IssueStatus::Resolved => "Resolved".green(),
    }
}

fn format_timestamp(issue: &Issue) -> String {
    issue
        .timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "just now".to_string())
}

pub fn print_issue(issue: &Issue) {
    println!(
        "{} {}",
        issue.id.cyan().bold(),
        issue.category.to_string().bold()
    );
    println!("Status:      {}", format_status(issue.status));
    println!(
        "Location:    {}, {}",
        issue.location.lat, issue.location.lng
    );
    println!("Reported:    {}", format_timestamp(issue));
    println!("Image:       {}", issue.image_url);
    println!("Directions:  {}", issue.directions_url());

    if !issue.description.is_empty() {
        println!("\n{}", issue.description);
    }
}

pub fn print_issue_list(issues: &[Issue]) {
    if issues.is_empty() {
        println!("No issues found.");
        return;
    }

    for issue in issues {
        println!(
            "{} {} [{}] {} ({}, {})",
            issue.id.cyan(),
            format_status(issue.status),
            issue.category.to_string().blue(),
            format_timestamp(issue),
            issue.location.lat,
            issue.location.lng
        );
    }
}
