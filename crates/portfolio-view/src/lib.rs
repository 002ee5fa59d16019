//! Filtered project list for the portfolio view.
//!
//! This crate holds the in-memory [`Dataset`] snapshot, the [`filter`] engine
//! that narrows it by status, department, lead and name search, and the
//! [`DatasetStore`] that reads and writes the snapshot as JSON.

use portfolio_model::models::{Department, Personnel, Project};
use serde::{Deserialize, Serialize};

pub mod filter;
mod store;

pub use store::{DatasetStore, DatasetStoreError, StoreResult};

/// Snapshot of the three record collections the view is built from.
///
/// Collections are kept in source order; the filter engine preserves that
/// order in its output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Projects, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Departments referenced by `Project::department_id`.
    #[serde(default)]
    pub departments: Vec<Department>,

    /// People referenced by `Project::lead_id`.
    #[serde(default)]
    pub personnel: Vec<Personnel>,
}

impl Dataset {
    /// Creates a dataset from its three collections.
    pub fn new(
        projects: Vec<Project>,
        departments: Vec<Department>,
        personnel: Vec<Personnel>,
    ) -> Self {
        Self {
            projects,
            departments,
            personnel,
        }
    }

    /// Returns true if the dataset has no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Borrows the collections as a filter context.
    pub fn context(&self) -> filter::FilterContext<'_> {
        filter::FilterContext::new(&self.projects, &self.departments, &self.personnel)
    }
}
