//! Project list output formatting.

use owo_colors::OwoColorize;
use portfolio_model::models::ProjectStatus;
use portfolio_view::filter::{FilterState, ProjectRow, MISSING_LABEL};
use serde::Serialize;

use super::helpers::{format_status, pad, paint_department, truncate_str};

/// Shown instead of a table when no project passes the filters.
pub const EMPTY_STATE_MESSAGE: &str = "No matching projects found.";

const NAME_WIDTH: usize = 20;
const DEPARTMENT_WIDTH: usize = 16;
const LEAD_WIDTH: usize = 28;
const START_WIDTH: usize = 12;

/// JSON output structure for a project row.
#[derive(Serialize)]
pub struct ProjectRowOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub department_id: &'a str,
    pub department: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_color: Option<&'a str>,
    pub lead_id: &'a str,
    pub lead: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_role: Option<&'a str>,
    pub start_date: &'a str,
    pub status: ProjectStatus,
}

impl<'a> From<&ProjectRow<'a>> for ProjectRowOutput<'a> {
    fn from(row: &ProjectRow<'a>) -> Self {
        let project = row.project;
        Self {
            id: &project.id,
            name: &project.name,
            description: &project.description,
            department_id: &project.department_id,
            department: row.department.map(|d| d.name.as_str()),
            department_color: row.department_color().filter(|c| !c.is_empty()),
            lead_id: &project.lead_id,
            lead: row.lead.map(|p| p.name.as_str()),
            lead_role: row.lead_role().filter(|r| !r.is_empty()),
            start_date: &project.start_date,
            status: project.status,
        }
    }
}

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ProjectListOutput<'a> {
    pub filters: &'a FilterState,
    pub count: usize,
    pub projects: Vec<ProjectRowOutput<'a>>,
}

/// Formats filtered rows as JSON, echoing the filters that produced them.
pub fn format_rows_json(
    state: &FilterState,
    rows: &[ProjectRow<'_>],
) -> Result<String, serde_json::Error> {
    let output = ProjectListOutput {
        filters: state,
        count: rows.len(),
        projects: rows.iter().map(ProjectRowOutput::from).collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the lead cell: `[A] Ana (Program Manager)`, or the missing label.
fn format_lead(row: &ProjectRow<'_>) -> String {
    let Some(lead) = row.lead else {
        return MISSING_LABEL.to_string();
    };

    let name = row.lead_name();
    let mut cell = match lead.initial() {
        Some(initial) => format!("[{initial}] {name}"),
        None => name.to_string(),
    };
    if !lead.role.is_empty() {
        cell.push_str(&format!(" ({})", lead.role));
    }
    cell
}

/// Formats filtered rows as a table.
///
/// An empty slice renders [`EMPTY_STATE_MESSAGE`] instead of a header.
pub fn format_rows_table(
    rows: &[ProjectRow<'_>],
    use_colors: bool,
    description_width: usize,
) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_STATE_MESSAGE}\n");
    }

    let mut output = String::new();

    let header = format!(
        "{:<NAME_WIDTH$} {:<description_width$} {:<DEPARTMENT_WIDTH$} {:<LEAD_WIDTH$} {:<START_WIDTH$} {}",
        "Project", "Description", "Department", "Lead", "Start", "Status"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    let status_width = ProjectStatus::ALL
        .iter()
        .map(|s| s.as_str().len())
        .max()
        .unwrap_or(0);

    for row in rows {
        let project = row.project;

        let name = pad(&truncate_str(&project.name, NAME_WIDTH), NAME_WIDTH);
        let name = if use_colors {
            name.bold().to_string()
        } else {
            name
        };
        let description = pad(
            &truncate_str(&project.description, description_width),
            description_width,
        );
        let department = paint_department(
            &pad(
                &truncate_str(row.department_name(), DEPARTMENT_WIDTH),
                DEPARTMENT_WIDTH,
            ),
            row.department_color(),
            use_colors,
        );
        let lead = pad(&truncate_str(&format_lead(row), LEAD_WIDTH), LEAD_WIDTH);
        let start = pad(&truncate_str(&project.start_date, START_WIDTH), START_WIDTH);
        let status = format_status(project.status, status_width, use_colors);

        let line = format!("{name} {description} {department} {lead} {start} {status}");
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
