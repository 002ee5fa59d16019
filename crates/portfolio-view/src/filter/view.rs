//! Memoized project list bound to a dataset and a filter state.

use portfolio_model::models::{Department, Personnel, Project, ProjectStatus};
use tracing::trace;

use super::evaluator::FilterEngine;
use super::row::{ProjectRow, RowPosition};
use super::selector::Selector;
use super::state::FilterState;
use crate::Dataset;

/// Last evaluation result and the inputs it was computed from.
#[derive(Debug, Clone)]
struct Memo {
    revision: u64,
    state: FilterState,
    positions: Vec<RowPosition>,
}

/// A project list that re-evaluates its filter only when an input changed.
///
/// The view owns the [`Dataset`] and the [`FilterState`]. Every dataset
/// mutation bumps a revision counter; the cached rows are reused as long as
/// the revision and the state both equal the ones they were computed from.
/// Storing a state equal to the current one therefore costs nothing.
///
/// # Example
///
/// ```
/// use portfolio_model::models::{Project, ProjectStatus};
/// use portfolio_view::filter::{ProjectListView, Selector};
/// use portfolio_view::Dataset;
///
/// let dataset = Dataset::new(
///     vec![
///         Project::new("1", "Apollo", "d1", "p1", ProjectStatus::Active),
///         Project::new("2", "Zeus", "d2", "p2", ProjectStatus::Done),
///     ],
///     vec![],
///     vec![],
/// );
///
/// let mut view = ProjectListView::new(dataset);
/// assert_eq!(view.rows().len(), 2);
/// assert_eq!(view.rows().len(), 2);
/// assert_eq!(view.evaluations(), 1);
///
/// view.set_status(Selector::only(ProjectStatus::Done));
/// assert_eq!(view.rows()[0].project.name, "Zeus");
/// assert_eq!(view.evaluations(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectListView {
    dataset: Dataset,
    state: FilterState,
    revision: u64,
    memo: Option<Memo>,
    evaluations: u64,
}

impl ProjectListView {
    /// Creates a view over `dataset` with the default (unfiltered) state.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_state(dataset, FilterState::default())
    }

    /// Creates a view over `dataset` starting from `state`.
    pub fn with_state(dataset: Dataset, state: FilterState) -> Self {
        Self {
            dataset,
            state,
            revision: 0,
            memo: None,
            evaluations: 0,
        }
    }

    /// Returns the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Number of times the filter has actually been evaluated.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Returns true if the next [`rows`](Self::rows) call will re-evaluate.
    pub fn is_stale(&self) -> bool {
        match &self.memo {
            Some(memo) => memo.revision != self.revision || memo.state != self.state,
            None => true,
        }
    }

    // ==================== Dataset Updates ====================

    /// Replaces the whole dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.bump_revision();
    }

    /// Replaces the project collection.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.dataset.projects = projects;
        self.bump_revision();
    }

    /// Replaces the department collection.
    pub fn set_departments(&mut self, departments: Vec<Department>) {
        self.dataset.departments = departments;
        self.bump_revision();
    }

    /// Replaces the personnel collection.
    pub fn set_personnel(&mut self, personnel: Vec<Personnel>) {
        self.dataset.personnel = personnel;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ==================== Filter Updates ====================

    /// Replaces the whole filter state.
    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
    }

    /// Sets the status selector.
    pub fn set_status(&mut self, status: Selector<ProjectStatus>) {
        self.state.set_status(status);
    }

    /// Sets the department selector.
    pub fn set_department(&mut self, department: Selector<String>) {
        self.state.set_department(department);
    }

    /// Sets the lead selector.
    pub fn set_lead(&mut self, lead: Selector<String>) {
        self.state.set_lead(lead);
    }

    /// Sets the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.set_search(search);
    }

    /// Resets every selector to its default.
    pub fn reset_filters(&mut self) {
        self.state.reset();
    }

    // ==================== Results ====================

    /// Returns the visible rows, evaluating the filter only if an input
    /// changed since the last call.
    pub fn rows(&mut self) -> Vec<ProjectRow<'_>> {
        self.refresh();
        let context = self.dataset.context();
        self.memo
            .as_ref()
            .map(|memo| {
                memo.positions
                    .iter()
                    .filter_map(|position| context.row_at(*position))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of visible rows.
    pub fn len(&mut self) -> usize {
        self.refresh();
        self.memo.as_ref().map_or(0, |memo| memo.positions.len())
    }

    /// Returns true if no project passes the current filter.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    fn refresh(&mut self) {
        if !self.is_stale() {
            trace!(revision = self.revision, "reusing cached project rows");
            return;
        }

        let positions = FilterEngine::new(self.dataset.context(), &self.state).evaluate_positions();
        self.evaluations += 1;
        self.memo = Some(Memo {
            revision: self.revision,
            state: self.state.clone(),
            positions,
        });
    }
}
