use crate::domain::common::{ContentRecord, RecordId};
use crate::shared::filter::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a portfolio project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================

/// Delivery state of a project. Wire form is kebab-case ("in-progress").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Concept,
}

impl ProjectStatus {
    /// The closed status set, in presentation order.
    pub const ALL: [ProjectStatus; 3] = [Self::Completed, Self::InProgress, Self::Concept];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Concept => "concept",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == s)
    }

    /// Human label for filter buttons and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Concept => "Concept",
        }
    }

    /// Badge variant the status renders with.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::Completed => "success",
            Self::InProgress => "primary",
            Self::Concept => "warning",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// A portfolio project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub demo_url: Option<String>,

    #[serde(default)]
    pub github_url: Option<String>,

    pub created_date: DateTime<Utc>,
}

impl ContentRecord for Project {
    type Id = ProjectId;

    fn id(&self) -> &ProjectId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn collection_name() -> &'static str {
        "projects"
    }
}

impl Filterable for Project {
    fn filter_values(&self) -> Vec<String> {
        vec![self.status.as_str().to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_form() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let status: ProjectStatus = serde_json::from_str("\"concept\"").unwrap();
        assert_eq!(status, ProjectStatus::Concept);
    }

    #[test]
    fn test_status_parse_roundtrip() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::parse("cancelled"), None);
    }

    #[test]
    fn test_decode_with_optional_fields_missing() {
        let json = r#"{
            "id": "6b8f3f9e-4f9e-4f00-9a39-5a4f6f1f2a10",
            "title": "CLI Toolkit",
            "description": "Command line helpers",
            "status": "completed",
            "created_date": "2024-03-15T12:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.title, "CLI Toolkit");
        assert!(project.technologies.is_empty());
        assert!(project.demo_url.is_none());
        assert_eq!(project.id.as_string(), "6b8f3f9e-4f9e-4f00-9a39-5a4f6f1f2a10");
    }

    #[test]
    fn test_filter_values_is_status() {
        let json = r#"{
            "id": "6b8f3f9e-4f9e-4f00-9a39-5a4f6f1f2a10",
            "title": "CLI Toolkit",
            "description": "Command line helpers",
            "status": "in-progress",
            "created_date": "2024-03-15T12:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.filter_values(), vec!["in-progress".to_string()]);
    }
}
