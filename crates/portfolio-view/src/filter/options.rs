//! Choices offered by the status, department and lead selectors.

use portfolio_model::models::ProjectStatus;
use serde::Serialize;

use super::context::FilterContext;
use super::selector::ALL_SENTINEL;

/// One entry in a selector's drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChoice {
    /// Value stored in the [`FilterState`](super::FilterState) when chosen.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl FilterChoice {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Returns true for the leading "all" entry.
    pub fn is_all(&self) -> bool {
        self.value == ALL_SENTINEL
    }
}

/// The three drop-down lists, each led by its "all" entry.
///
/// Departments and personnel appear in collection order; statuses in
/// [`ProjectStatus::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Status choices.
    pub statuses: Vec<FilterChoice>,
    /// Department choices (value is the department ID).
    pub departments: Vec<FilterChoice>,
    /// Lead choices (value is the personnel ID).
    pub personnel: Vec<FilterChoice>,
}

impl FilterOptions {
    /// Builds the choices from the collections in `context`.
    pub fn from_context(context: &FilterContext<'_>) -> Self {
        let statuses = std::iter::once(FilterChoice::new(ALL_SENTINEL, "All statuses"))
            .chain(
                ProjectStatus::ALL
                    .iter()
                    .map(|s| FilterChoice::new(s.as_str(), s.as_str())),
            )
            .collect();

        let departments = std::iter::once(FilterChoice::new(ALL_SENTINEL, "All departments"))
            .chain(
                context
                    .departments()
                    .iter()
                    .map(|d| FilterChoice::new(&d.id, &d.name)),
            )
            .collect();

        let personnel = std::iter::once(FilterChoice::new(ALL_SENTINEL, "All personnel"))
            .chain(
                context
                    .personnel()
                    .iter()
                    .map(|p| FilterChoice::new(&p.id, &p.name)),
            )
            .collect();

        Self {
            statuses,
            departments,
            personnel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_model::models::{Department, Personnel};

    #[test]
    fn test_options_lead_with_all() {
        let context = FilterContext::new(&[], &[], &[]);
        let options = FilterOptions::from_context(&context);

        assert_eq!(options.statuses.len(), ProjectStatus::ALL.len() + 1);
        assert!(options.statuses[0].is_all());
        assert_eq!(options.departments.len(), 1);
        assert!(options.departments[0].is_all());
        assert_eq!(options.personnel.len(), 1);
        assert!(options.personnel[0].is_all());
    }

    #[test]
    fn test_options_follow_collection_order() {
        let depts = vec![
            Department::new("d2", "Ops", ""),
            Department::new("d1", "Eng", ""),
        ];
        let people = vec![Personnel::new("p1", "Ana", "PM")];
        let context = FilterContext::new(&[], &depts, &people);
        let options = FilterOptions::from_context(&context);

        let values: Vec<&str> = options.departments.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["all", "d2", "d1"]);
        assert_eq!(options.personnel[1], FilterChoice::new("p1", "Ana"));

        let labels: Vec<&str> = options.statuses.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All statuses", "Planning", "Active", "On Hold", "Done", "Cancelled"]
        );
    }
}
