use crate::cli::commands::CategoryArg;
use crate::error::CivicError;
use crate::model::{Category, Location};
use crate::validation;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use super::CommandContext;

/// Parameters for report submission
pub struct ReportParams {
    pub image: PathBuf,
    pub lat: f64,
    pub lng: f64,
    pub category: Option<CategoryArg>,
    pub description: Option<String>,
    pub no_classify: bool,
    pub json: bool,
}

pub fn handle_report(ctx: &CommandContext, params: ReportParams) -> Result<()> {
    let location = Location::new(params.lat, params.lng);

    validation::validate_image_path(&params.image)?;
    validation::validate_location(&location)?;
    if let Some(ref d) = params.description {
        validation::validate_description(d)?;
    }

    // Category precedence: explicit flag, then classifier suggestion. A
    // failed classification is not fatal; the user is asked to pick one.
    let category: Category = match params.category {
        Some(c) => c.into(),
        None if params.no_classify => {
            return Err(CivicError::Validation(
                "No category given and classification skipped. Pass --category.".to_string(),
            )
            .into());
        }
        None => match ctx.client.predict(&params.image) {
            Ok(Some(suggested)) => {
                if !params.json {
                    println!("{} {}", "Classifier suggests".blue(), suggested);
                }
                suggested
            }
            Ok(None) => {
                return Err(CivicError::Validation(
                    "Classifier could not suggest a category. Pass --category.".to_string(),
                )
                .into());
            }
            Err(e) => {
                debug!(error = %e, "classification failed");
                return Err(CivicError::Validation(
                    "Classifier unavailable. Pass --category to submit anyway.".to_string(),
                )
                .into());
            }
        },
    };

    let description = params
        .description
        .unwrap_or_else(|| ctx.config.report.default_description.clone());

    let created = ctx
        .client
        .create_issue(&params.image, location, category, &description)?;

    if params.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": created.id,
                "category": created.category,
                "imageUrl": created.image_url,
                "location": location,
            }))?
        );
    } else {
        println!(
            "{} {} [{}] {}",
            "Submitted".green(),
            created.id.cyan(),
            created.category.to_string().blue(),
            created.image_url
        );
    }
    Ok(())
}
