use crate::error::{CivicError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Report lifecycle status. The service knows exactly two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IssueStatus {
    #[default]
    Pending,
    Resolved,
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueStatus::Pending => write!(f, "Pending"),
            IssueStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

impl FromStr for IssueStatus {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" | "open" => Ok(IssueStatus::Pending),
            "resolved" | "closed" | "done" => Ok(IssueStatus::Resolved),
            _ => Err(CivicError::Parse(format!("Invalid issue status: {}", s))),
        }
    }
}

/// Fixed category label set shared with the classifier and the submission
/// form. Wire labels are capitalized and "Broken Streetlight" keeps its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Pothole,
    Garbage,
    #[serde(rename = "Broken Streetlight")]
    BrokenStreetlight,
    Normal,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Pothole,
        Category::Garbage,
        Category::BrokenStreetlight,
        Category::Normal,
        Category::Other,
    ];

    /// Label exactly as the service expects it in form fields.
    pub fn as_label(&self) -> &'static str {
        match self {
            Category::Pothole => "Pothole",
            Category::Garbage => "Garbage",
            Category::BrokenStreetlight => "Broken Streetlight",
            Category::Normal => "Normal",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl FromStr for Category {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pothole" => Ok(Category::Pothole),
            "garbage" => Ok(Category::Garbage),
            "broken streetlight" | "broken-streetlight" | "streetlight" => {
                Ok(Category::BrokenStreetlight)
            }
            "normal" => Ok(Category::Normal),
            "other" => Ok(Category::Other),
            _ => Err(CivicError::Parse(format!("Invalid category: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_labels_are_capitalized() {
        assert_eq!(
            serde_json::to_string(&IssueStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(
            serde_json::to_string(&IssueStatus::Resolved).unwrap(),
            "\"Resolved\""
        );
    }

    #[test]
    fn streetlight_label_keeps_the_space() {
        assert_eq!(
            serde_json::to_string(&Category::BrokenStreetlight).unwrap(),
            "\"Broken Streetlight\""
        );
        let parsed: Category = serde_json::from_str("\"Broken Streetlight\"").unwrap();
        assert_eq!(parsed, Category::BrokenStreetlight);
    }

    #[test]
    fn category_from_str_accepts_cli_spellings() {
        assert_eq!(
            "broken-streetlight".parse::<Category>().unwrap(),
            Category::BrokenStreetlight
        );
        assert_eq!("POTHOLE".parse::<Category>().unwrap(), Category::Pothole);
        assert!("bicycle".parse::<Category>().is_err());
    }

    #[test]
    fn status_from_str_accepts_aliases() {
        assert_eq!("open".parse::<IssueStatus>().unwrap(), IssueStatus::Pending);
        assert_eq!(
            "closed".parse::<IssueStatus>().unwrap(),
            IssueStatus::Resolved
        );
    }
}
