//! Display rows produced by the filter engine.

use portfolio_model::models::{Department, Personnel, Project};
use serde::Serialize;

/// Label shown in place of a department or lead that could not be resolved.
pub const MISSING_LABEL: &str = "N/A";

/// A project that passed the filter, joined to its department and lead.
///
/// `department` and `lead` are `None` when the project's foreign key has no
/// match in the current collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRow<'a> {
    /// The matching project.
    pub project: &'a Project,
    /// The first department whose ID equals `project.department_id`.
    pub department: Option<&'a Department>,
    /// The first person whose ID equals `project.lead_id`.
    pub lead: Option<&'a Personnel>,
}

impl<'a> ProjectRow<'a> {
    /// Department name, or [`MISSING_LABEL`] when unresolved or unnamed.
    pub fn department_name(&self) -> &'a str {
        self.department
            .map(|d| d.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING_LABEL)
    }

    /// Department accent color, if the department resolved.
    pub fn department_color(&self) -> Option<&'a str> {
        self.department.map(|d| d.color.as_str())
    }

    /// Lead name, or [`MISSING_LABEL`] when unresolved or unnamed.
    pub fn lead_name(&self) -> &'a str {
        self.lead
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING_LABEL)
    }

    /// Lead role, if the lead resolved.
    pub fn lead_role(&self) -> Option<&'a str> {
        self.lead.map(|p| p.role.as_str())
    }

    /// Uppercased first letter of the lead's name.
    pub fn lead_initial(&self) -> Option<String> {
        self.lead.and_then(Personnel::initial)
    }
}

/// Positions of a row's records within the collections it was built from.
///
/// Lets a caller cache a result without holding borrows of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowPosition {
    /// Index into the project collection.
    pub project: usize,
    /// Index into the department collection.
    pub department: Option<usize>,
    /// Index into the personnel collection.
    pub lead: Option<usize>,
}
