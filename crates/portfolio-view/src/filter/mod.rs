//! Project filter engine.
//!
//! Narrows a [`Dataset`](crate::Dataset) with four independent selectors held
//! in a [`FilterState`]:
//!
//! - `status` - a [`ProjectStatus`](portfolio_model::models::ProjectStatus) or `all`
//! - `department` - a department ID or `all`
//! - `lead` - a personnel ID or `all`
//! - `search` - case-insensitive substring of the project name (empty matches everything)
//!
//! A project is kept only when all four selectors match. Kept projects are
//! joined to their department and lead by ID; a dangling ID resolves to
//! `None` rather than dropping the row. Output order is input order.
//!
//! [`FilterEngine`] is a pure function of its inputs. [`ProjectListView`]
//! wraps it with the memoization a UI binding needs: it re-evaluates only
//! after the dataset or the filter state changes.
//!
//! # Example
//!
//! ```
//! use portfolio_model::models::{Department, Personnel, Project, ProjectStatus};
//! use portfolio_view::filter::{FilterEngine, FilterState, Selector};
//! use portfolio_view::Dataset;
//!
//! let dataset = Dataset::new(
//!     vec![
//!         Project::new("1", "Apollo", "d1", "p1", ProjectStatus::Active),
//!         Project::new("2", "Zeus", "d2", "p2", ProjectStatus::Done),
//!     ],
//!     vec![Department::new("d1", "Eng", "#3b82f6")],
//!     vec![Personnel::new("p1", "Ana", "PM")],
//! );
//!
//! let state = FilterState::new()
//!     .with_status(Selector::only(ProjectStatus::Active))
//!     .with_search("apo");
//!
//! let rows = FilterEngine::new(dataset.context(), &state).evaluate();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].project.id, "1");
//! assert_eq!(rows[0].department_name(), "Eng");
//! assert_eq!(rows[0].lead_name(), "Ana");
//! ```

mod context;
mod evaluator;
mod options;
mod row;
mod selector;
mod state;
mod view;

pub use context::FilterContext;
pub use evaluator::{evaluate, FilterEngine};
pub use options::{FilterChoice, FilterOptions};
pub use row::{ProjectRow, RowPosition, MISSING_LABEL};
pub use selector::{Selector, ALL_SENTINEL};
pub use state::FilterState;
pub use view::ProjectListView;

#[cfg(test)]
mod tests;
