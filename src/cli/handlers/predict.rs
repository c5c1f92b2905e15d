use crate::validation;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_predict(ctx: &CommandContext, image: PathBuf, json: bool) -> Result<()> {
    validation::validate_image_path(&image)?;

    let suggestion = ctx.client.predict(&image)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "category": suggestion }))?
        );
    } else {
        match suggestion {
            Some(category) => println!("{} {}", "Suggested category:".blue(), category),
            None => println!("No suggestion. Pick a category manually."),
        }
    }
    Ok(())
}
