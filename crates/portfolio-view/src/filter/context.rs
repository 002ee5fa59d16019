//! Read-only view of the record collections, with lookup helpers.

use portfolio_model::models::{Department, Personnel, Project};
use strsim::levenshtein;

use super::row::{ProjectRow, RowPosition};

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Borrowed snapshot of the projects, departments and personnel.
///
/// Department and lead lookups return the first record with a matching ID,
/// in collection order.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    projects: &'a [Project],
    departments: &'a [Department],
    personnel: &'a [Personnel],
}

impl<'a> FilterContext<'a> {
    /// Creates a new filter context.
    ///
    /// # Arguments
    ///
    /// * `projects` - Projects to filter, in display order
    /// * `departments` - Departments referenced by the projects
    /// * `personnel` - People referenced by the projects
    pub fn new(
        projects: &'a [Project],
        departments: &'a [Department],
        personnel: &'a [Personnel],
    ) -> Self {
        Self {
            projects,
            departments,
            personnel,
        }
    }

    /// Returns the project collection.
    pub fn projects(&self) -> &'a [Project] {
        self.projects
    }

    /// Returns the department collection.
    pub fn departments(&self) -> &'a [Department] {
        self.departments
    }

    /// Returns the personnel collection.
    pub fn personnel(&self) -> &'a [Personnel] {
        self.personnel
    }

    /// Finds the first department with the given ID.
    pub fn find_department(&self, id: &str) -> Option<&'a Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// Finds the first person with the given ID.
    pub fn find_personnel(&self, id: &str) -> Option<&'a Personnel> {
        self.personnel.iter().find(|p| p.id == id)
    }

    /// Index of the first department with the given ID.
    pub fn department_position(&self, id: &str) -> Option<usize> {
        self.departments.iter().position(|d| d.id == id)
    }

    /// Index of the first person with the given ID.
    pub fn personnel_position(&self, id: &str) -> Option<usize> {
        self.personnel.iter().position(|p| p.id == id)
    }

    /// Joins a project to its department and lead.
    pub fn resolve(&self, project: &'a Project) -> ProjectRow<'a> {
        ProjectRow {
            project,
            department: self.find_department(&project.department_id),
            lead: self.find_personnel(&project.lead_id),
        }
    }

    /// Rebuilds a row from positions taken against this same context.
    ///
    /// Returns `None` if any position is out of range, which only happens
    /// when the positions came from a different snapshot.
    pub fn row_at(&self, position: RowPosition) -> Option<ProjectRow<'a>> {
        let project = self.projects.get(position.project)?;
        let department = match position.department {
            Some(index) => Some(self.departments.get(index)?),
            None => None,
        };
        let lead = match position.lead {
            Some(index) => Some(self.personnel.get(index)?),
            None => None,
        };
        Some(ProjectRow {
            project,
            department,
            lead,
        })
    }

    // ==================== Name-or-ID Lookups ====================

    /// Finds a department by exact ID, then by name (case-insensitive).
    pub fn find_department_by_name_or_id(&self, name_or_id: &str) -> Option<&'a Department> {
        self.find_department(name_or_id).or_else(|| {
            let name_lower = name_or_id.to_lowercase();
            self.departments
                .iter()
                .find(|d| d.name.to_lowercase() == name_lower)
        })
    }

    /// Finds a person by exact ID, then by name (case-insensitive).
    pub fn find_personnel_by_name_or_id(&self, name_or_id: &str) -> Option<&'a Personnel> {
        self.find_personnel(name_or_id).or_else(|| {
            let name_lower = name_or_id.to_lowercase();
            self.personnel
                .iter()
                .find(|p| p.name.to_lowercase() == name_lower)
        })
    }

    /// Suggests the closest department name for a query that did not resolve.
    pub fn suggest_department(&self, query: &str) -> Option<String> {
        find_similar_name(query, self.departments.iter().map(|d| d.name.as_str()))
    }

    /// Suggests the closest person name for a query that did not resolve.
    pub fn suggest_personnel(&self, query: &str) -> Option<String> {
        find_similar_name(query, self.personnel.iter().map(|p| p.name.as_str()))
    }
}

/// Finds the best matching name from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold and
/// it is not an exact match.
fn find_similar_name<'b>(query: &str, candidates: impl Iterator<Item = &'b str>) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| (name, levenshtein(&query_lower, &name.to_lowercase())))
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.to_string())
    } else {
        None
    }
}
