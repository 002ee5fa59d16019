//! Filter evaluation against the project collection.
//!
//! This module provides the [`FilterEngine`] for applying a [`FilterState`]
//! to the projects of a [`FilterContext`].

use portfolio_model::models::Project;
use tracing::debug;

use super::context::FilterContext;
use super::row::{ProjectRow, RowPosition};
use super::state::FilterState;
use crate::Dataset;

/// Applies a [`FilterState`] to the projects in a [`FilterContext`].
///
/// Evaluation is pure: the same context and state always give the same rows
/// in the same order, and neither input is modified.
#[derive(Debug, Clone)]
pub struct FilterEngine<'a, 's> {
    context: FilterContext<'a>,
    state: &'s FilterState,
    /// Lowercased once so each project only lowercases its own name.
    search_lower: String,
}

impl<'a, 's> FilterEngine<'a, 's> {
    /// Creates a new filter engine.
    ///
    /// # Arguments
    ///
    /// * `context` - The projects to filter and the collections to join against
    /// * `state` - The selectors to apply
    pub fn new(context: FilterContext<'a>, state: &'s FilterState) -> Self {
        Self {
            context,
            state,
            search_lower: state.search.to_lowercase(),
        }
    }

    /// Returns true if the project passes all four selectors.
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_status(project)
            && self.matches_department(project)
            && self.matches_lead(project)
            && self.matches_search(project)
    }

    /// Status selector: `all`, or exact status equality.
    pub fn matches_status(&self, project: &Project) -> bool {
        self.state.status.matches(&project.status)
    }

    /// Department selector: `all`, or exact department ID equality.
    pub fn matches_department(&self, project: &Project) -> bool {
        self.state.department.matches(&project.department_id)
    }

    /// Lead selector: `all`, or exact personnel ID equality.
    pub fn matches_lead(&self, project: &Project) -> bool {
        self.state.lead.matches(&project.lead_id)
    }

    /// Search: lowercased name contains the lowercased search text.
    ///
    /// Only the name is searched. The text is not trimmed or tokenized, so
    /// an empty search matches every project.
    pub fn matches_search(&self, project: &Project) -> bool {
        self.search_lower.is_empty() || project.name.to_lowercase().contains(&self.search_lower)
    }

    /// Returns the matching projects, in input order, without joining.
    pub fn filter_projects(&self) -> Vec<&'a Project> {
        self.context
            .projects()
            .iter()
            .filter(|project| self.matches(project))
            .collect()
    }

    /// Returns the number of matching projects.
    pub fn count(&self) -> usize {
        self.context
            .projects()
            .iter()
            .filter(|project| self.matches(project))
            .count()
    }

    /// Evaluates the filter and records where each row's records live.
    ///
    /// Used by callers that cache a result without holding borrows of the
    /// dataset.
    pub fn evaluate_positions(&self) -> Vec<RowPosition> {
        let positions: Vec<RowPosition> = self
            .context
            .projects()
            .iter()
            .enumerate()
            .filter(|(_, project)| self.matches(project))
            .map(|(index, project)| RowPosition {
                project: index,
                department: self.context.department_position(&project.department_id),
                lead: self.context.personnel_position(&project.lead_id),
            })
            .collect();

        debug!(
            projects = self.context.projects().len(),
            matched = positions.len(),
            status = %self.state.status,
            department = %self.state.department,
            lead = %self.state.lead,
            search = %self.state.search,
            "evaluated project filter"
        );

        positions
    }

    /// Evaluates the filter, joining each matching project to its
    /// department and lead.
    ///
    /// Unresolved references become `None`; they never drop the row.
    pub fn evaluate(&self) -> Vec<ProjectRow<'a>> {
        let rows: Vec<ProjectRow<'a>> = self
            .filter_projects()
            .into_iter()
            .map(|project| self.context.resolve(project))
            .collect();

        debug!(
            projects = self.context.projects().len(),
            matched = rows.len(),
            "resolved project rows"
        );

        rows
    }
}

/// Evaluates `state` against a dataset.
///
/// Shorthand for `FilterEngine::new(dataset.context(), state).evaluate()`.
pub fn evaluate<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<ProjectRow<'a>> {
    FilterEngine::new(dataset.context(), state).evaluate()
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
