//! Project lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle status of a project.
///
/// The set is closed. Text forms are the display labels and are matched
/// exactly, so `"active"` is not a valid status.
///
/// # Example
///
/// ```
/// use portfolio_model::models::ProjectStatus;
///
/// let status: ProjectStatus = "On Hold".parse().unwrap();
/// assert_eq!(status, ProjectStatus::OnHold);
/// assert_eq!(status.to_string(), "On Hold");
/// assert!("on hold".parse::<ProjectStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Scoped but not started.
    Planning,
    /// Work in progress.
    Active,
    /// Paused.
    #[serde(rename = "On Hold")]
    OnHold,
    /// Finished.
    Done,
    /// Stopped before completion.
    Cancelled,
}

impl ProjectStatus {
    /// Every status, in display order.
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Done,
        ProjectStatus::Cancelled,
    ];

    /// Returns the display label, which is also the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Done => "Done",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::unknown_status(s))
    }
}
