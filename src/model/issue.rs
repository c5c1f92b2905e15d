use super::types::{Category, IssueStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as reported by the device that captured the
/// photo. Stored coordinates are never modified client-side; map display
/// uses a derived position instead (see [`crate::map`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A citizen-submitted issue report, owned by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: String,

    pub category: Category,

    #[serde(default)]
    pub status: IssueStatus,

    pub location: Location,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    #[serde(default, with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Issue {
    pub fn is_pending(&self) -> bool {
        self.status == IssueStatus::Pending
    }

    pub fn is_resolved(&self) -> bool {
        self.status == IssueStatus::Resolved
    }

    /// Navigation link for field crews. Always built from the stored
    /// location, never from a display position.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.location.lat, self.location.lng
        )
    }
}

/// The service emits timestamps in two shapes depending on the serializer in
/// front of its database: RFC 3339 or RFC 2822. Accept both, emit RFC 3339,
/// and treat an absent or unreadable value as "just now" (None).
mod lenient_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .or_else(|_| DateTime::parse_from_rfc2822(&s))
                .ok()
                .map(|ts| ts.with_timezone(&Utc))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> &'static str {
        r#"{
            "_id": "6613f2a9e1b2c3d4e5f60718",
            "category": "Pothole",
            "status": "Pending",
            "location": {"lat": 28.6139, "lng": 77.209},
            "description": "Deep pothole near the bus stop",
            "imageUrl": "http://localhost:5000/uploads/1712345678_pothole.jpg",
            "timestamp": "2026-08-20T09:15:00+00:00"
        }"#
    }

    #[test]
    fn deserializes_service_payload() {
        let issue: Issue = serde_json::from_str(sample_payload()).unwrap();
        assert_eq!(issue.id, "6613f2a9e1b2c3d4e5f60718");
        assert_eq!(issue.category, Category::Pothole);
        assert_eq!(issue.status, IssueStatus::Pending);
        assert_eq!(issue.location.lat, 28.6139);
        assert!(issue.timestamp.is_some());
    }

    #[test]
    fn accepts_rfc2822_timestamps() {
        let payload = sample_payload().replace(
            "2026-08-20T09:15:00+00:00",
            "Thu, 20 Aug 2026 09:15:00 GMT",
        );
        let issue: Issue = serde_json::from_str(&payload).unwrap();
        let ts = issue.timestamp.unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-08-20T09:15:00+00:00");
    }

    #[test]
    fn tolerates_missing_description_and_timestamp() {
        let payload = r#"{
            "_id": "abc",
            "category": "Garbage",
            "status": "Resolved",
            "location": {"lat": 1.0, "lng": 2.0},
            "imageUrl": "http://example.com/x.jpg"
        }"#;
        let issue: Issue = serde_json::from_str(payload).unwrap();
        assert!(issue.description.is_empty());
        assert!(issue.timestamp.is_none());
        assert!(issue.is_resolved());
    }

    #[test]
    fn directions_url_uses_stored_location() {
        let issue: Issue = serde_json::from_str(sample_payload()).unwrap();
        assert_eq!(
            issue.directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=28.6139,77.209"
        );
    }
}
