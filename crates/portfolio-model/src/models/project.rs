//! Project records.

use serde::{Deserialize, Serialize};

use super::ProjectStatus;

/// A project in the portfolio.
///
/// `department_id` and `lead_id` are foreign keys into the department and
/// personnel collections. Nothing guarantees the referenced records exist.
///
/// # Example
///
/// ```
/// use portfolio_model::models::{Project, ProjectStatus};
///
/// let json = r#"{
///     "id": "prj-1",
///     "name": "Apollo",
///     "description": "Launch platform",
///     "departmentId": "d1",
///     "leadId": "p1",
///     "startDate": "2024-03-01",
///     "status": "Active"
/// }"#;
///
/// let project: Project = serde_json::from_str(json).unwrap();
/// assert_eq!(project.department_id, "d1");
/// assert_eq!(project.status, ProjectStatus::Active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project ID.
    pub id: String,

    /// Project name. The only field free-text search looks at.
    pub name: String,

    /// Longer description, shown truncated next to the name.
    #[serde(default)]
    pub description: String,

    /// ID of the owning department.
    pub department_id: String,

    /// ID of the person leading the project.
    pub lead_id: String,

    /// Start date as supplied by the data source. Never parsed.
    #[serde(default)]
    pub start_date: String,

    /// Current lifecycle status.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a project with an empty description and start date.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department_id: impl Into<String>,
        lead_id: impl Into<String>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            department_id: department_id.into(),
            lead_id: lead_id.into(),
            start_date: String::new(),
            status,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the start date.
    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = start_date.into();
        self
    }
}
