//! Client-side validation for report submissions.
//!
//! The resolver in [`crate::map`] is deliberately total and validates
//! nothing; the submission boundary is where bad input is rejected.

use crate::error::{CivicError, Result};
use crate::model::Location;
use std::path::Path;

/// Maximum allowed length for a report description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Validates coordinates before submission: finite and within WGS84 range.
pub fn validate_location(location: &Location) -> Result<()> {
    if !location.lat.is_finite() || !location.lng.is_finite() {
        return Err(CivicError::Validation(
            "Coordinates must be finite numbers".to_string(),
        ));
    }
    if !(-90.0..=90.0).contains(&location.lat) {
        return Err(CivicError::Validation(format!(
            "Latitude {} is outside [-90, 90]",
            location.lat
        )));
    }
    if !(-180.0..=180.0).contains(&location.lng) {
        return Err(CivicError::Validation(format!(
            "Longitude {} is outside [-180, 180]",
            location.lng
        )));
    }
    Ok(())
}

/// Validates a description.
pub fn validate_description(description: &str) -> Result<()> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CivicError::Validation(format!(
            "Description exceeds maximum length of {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

/// Validates that the image path points at an existing regular file.
pub fn validate_image_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CivicError::Validation(format!(
            "Image file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(CivicError::Validation(format!(
            "Image path is not a regular file: {}",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_locations() {
        assert!(validate_location(&Location::new(28.6139, 77.2090)).is_ok());
        assert!(validate_location(&Location::new(-90.0, 180.0)).is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(validate_location(&Location::new(91.0, 0.0)).is_err());
        assert!(validate_location(&Location::new(0.0, -181.0)).is_err());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(validate_location(&Location::new(f64::NAN, 0.0)).is_err());
        assert!(validate_location(&Location::new(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn rejects_oversized_descriptions() {
        assert!(validate_description("short enough").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }

    #[test]
    fn rejects_missing_image_files() {
        assert!(validate_image_path(Path::new("/nonexistent/photo.jpg")).is_err());
    }
}
