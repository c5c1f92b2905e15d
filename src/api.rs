//! HTTP client for the Civic-Eye issue store and classifier endpoints.
//!
//! The wire contract is owned by the service; this module only shapes
//! requests and surfaces failures. Every call carries an explicit timeout
//! and no retry; a failed call is reported to the user, who decides
//! whether to resubmit.

use crate::config::CivicConfig;
use crate::error::{CivicError, Result};
use crate::model::{Category, Issue, IssueStatus, Location};
use reqwest::blocking::multipart::Form;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

/// Acknowledgement returned by the store on submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub category: Category,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct PredictResponse {
    category: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    pub fn new(config: &CivicConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: config.admin_token(),
        })
    }

    /// Admin operations check the credential up front so a missing token
    /// fails before any network round-trip.
    pub fn ensure_admin(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(CivicError::MissingToken);
        }
        Ok(())
    }

    /// Fetch the full issue list. The caller replaces its local view
    /// wholesale; there is no incremental sync.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        let url = format!("{}/issues", self.base_url);
        debug!(url = %url, "fetching issue list");

        let resp = self.client.get(&url).send()?;
        let resp = Self::check(resp)?;
        let issues: Vec<Issue> = resp.json()?;

        info!(count = issues.len(), "fetched issues");
        Ok(issues)
    }

    /// Update one issue's status. Requires the admin token; on success the
    /// caller patches its local view by id.
    pub fn update_status(&self, id: &str, status: IssueStatus) -> Result<()> {
        let token = self.token.as_deref().ok_or(CivicError::MissingToken)?;
        let url = format!("{}/issues/{}", self.base_url, id);
        debug!(url = %url, %status, "updating issue status");

        let resp = self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "status": status }))
            .send()?;
        Self::check(resp)?;

        info!(id = %id, %status, "status updated");
        Ok(())
    }

    /// Submit a new report: photo, coordinates, category, description.
    pub fn create_issue(
        &self,
        image: &Path,
        location: Location,
        category: Category,
        description: &str,
    ) -> Result<CreatedIssue> {
        let url = format!("{}/issues", self.base_url);
        debug!(url = %url, category = %category, "submitting report");

        let form = Form::new()
            .file("file", image)?
            .text("lat", location.lat.to_string())
            .text("lng", location.lng.to_string())
            .text("category", category.as_label())
            .text("description", description.to_string());

        let resp = self.client.post(&url).multipart(form).send()?;
        let resp = Self::check(resp)?;
        let created: CreatedIssue = resp.json()?;

        info!(id = %created.id, "report submitted");
        Ok(created)
    }

    /// Ask the classifier for a category suggestion. Unknown labels and
    /// empty responses come back as None; the suggestion is never
    /// authoritative.
    pub fn predict(&self, image: &Path) -> Result<Option<Category>> {
        let url = format!("{}/predict", self.base_url);
        debug!(url = %url, "requesting classification");

        let form = Form::new().file("file", image)?;
        let resp = self.client.post(&url).multipart(form).send()?;
        let resp = Self::check(resp)?;
        let prediction: PredictResponse = resp.json()?;

        Ok(prediction
            .category
            .and_then(|label| label.parse::<Category>().ok()))
    }

    /// Map non-success responses to a typed error, preferring the service's
    /// `{"error": msg}` payload over the raw body.
    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);

        Err(CivicError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_issue_parses_service_acknowledgement() {
        let payload = r#"{
            "message": "Report submitted successfully",
            "id": "6613f2a9e1b2c3d4e5f60718",
            "category": "Garbage",
            "imageUrl": "http://localhost:5000/uploads/1712345678_photo.jpg"
        }"#;
        let created: CreatedIssue = serde_json::from_str(payload).unwrap();
        assert_eq!(created.id, "6613f2a9e1b2c3d4e5f60718");
        assert_eq!(created.category, Category::Garbage);
    }

    #[test]
    fn predict_response_tolerates_missing_category() {
        let empty: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.category.is_none());

        let known: PredictResponse =
            serde_json::from_str(r#"{"category": "Pothole"}"#).unwrap();
        assert_eq!(known.category.as_deref(), Some("Pothole"));
    }

    #[test]
    fn unknown_classifier_label_degrades_to_none() {
        // The classifier reports "Unknown" when inference fails; that must
        // not parse into the fixed label set.
        assert!("Unknown".parse::<Category>().is_err());
    }

    #[test]
    fn error_body_extraction_prefers_service_message() {
        let parsed: ErrorBody = serde_json::from_str(r#"{"error": "No file part"}"#).unwrap();
        assert_eq!(parsed.error, "No file part");
    }
}
