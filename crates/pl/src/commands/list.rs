//! List command implementation.
//!
//! Loads the dataset, turns the command-line filters into a [`FilterState`]
//! and prints the matching projects.

use portfolio_model::models::ProjectStatus;
use portfolio_view::filter::{FilterContext, FilterState, ProjectListView, Selector, ALL_SENTINEL};
use tracing::debug;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_rows_json, format_rows_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Status name, or "all".
    pub status: Option<String>,
    /// Department name or ID, or "all".
    pub department: Option<String>,
    /// Lead name or ID, or "all".
    pub lead: Option<String>,
    /// Name search text.
    pub search: Option<String>,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or a filter argument does
/// not name a known status, department or person.
pub fn execute(ctx: &CommandContext, opts: &ListOptions) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let state = build_filter_state(&dataset.context(), opts)?;

    let mut view = ProjectListView::with_state(dataset, state.clone());
    let rows = view.rows();
    debug!(matched = rows.len(), "list filtered");

    if ctx.json_output {
        let output = format_rows_json(&state, &rows)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_rows_table(&rows, ctx.use_colors, ctx.description_width);
        print!("{output}");
    }

    Ok(())
}

/// Validates the command-line filters and builds the state they describe.
///
/// Missing arguments leave their selector at `all`.
pub fn build_filter_state(context: &FilterContext<'_>, opts: &ListOptions) -> Result<FilterState> {
    let mut state = FilterState::new();

    if let Some(status) = &opts.status {
        state.set_status(status.parse::<Selector<ProjectStatus>>()?);
    }

    if let Some(department) = &opts.department {
        state.set_department(resolve_department(context, department)?);
    }

    if let Some(lead) = &opts.lead {
        state.set_lead(resolve_lead(context, lead)?);
    }

    if let Some(search) = &opts.search {
        state.set_search(search.as_str());
    }

    Ok(state)
}

/// Resolves a department argument given by ID or name.
fn resolve_department(context: &FilterContext<'_>, name_or_id: &str) -> Result<Selector<String>> {
    if name_or_id == ALL_SENTINEL {
        return Ok(Selector::All);
    }

    match context.find_department_by_name_or_id(name_or_id) {
        Some(department) => Ok(Selector::only(department.id.clone())),
        None => Err(not_found(
            "department",
            name_or_id,
            context.suggest_department(name_or_id),
        )),
    }
}

/// Resolves a lead argument given by ID or name.
fn resolve_lead(context: &FilterContext<'_>, name_or_id: &str) -> Result<Selector<String>> {
    if name_or_id == ALL_SENTINEL {
        return Ok(Selector::All);
    }

    match context.find_personnel_by_name_or_id(name_or_id) {
        Some(person) => Ok(Selector::only(person.id.clone())),
        None => Err(not_found(
            "lead",
            name_or_id,
            context.suggest_personnel(name_or_id),
        )),
    }
}

fn not_found(kind: &str, query: &str, suggestion: Option<String>) -> CommandError {
    let message = match suggestion {
        Some(name) => format!("{kind} not found: '{query}'. Did you mean '{name}'?"),
        None => format!("{kind} not found: '{query}'"),
    };
    CommandError::InvalidFilter(message)
}
