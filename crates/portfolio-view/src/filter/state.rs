//! The four filter selectors driven by the UI.

use portfolio_model::models::ProjectStatus;
use serde::{Deserialize, Serialize};

use super::Selector;

/// Current values of the status, department, lead and search filters.
///
/// Fields are independent; every combination is valid and at worst yields
/// no rows. The engine does not check that department or lead IDs exist;
/// whoever sets them is responsible for that.
///
/// `FilterState` is `Eq + Hash` so callers can key cached results on it.
///
/// # Example
///
/// ```
/// use portfolio_model::models::ProjectStatus;
/// use portfolio_view::filter::{FilterState, Selector};
///
/// let mut state = FilterState::new();
/// assert!(state.is_unfiltered());
///
/// state.set_status(Selector::only(ProjectStatus::Active));
/// state.set_search("apo");
/// assert!(!state.is_unfiltered());
///
/// state.reset();
/// assert_eq!(state, FilterState::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Status selector.
    pub status: Selector<ProjectStatus>,

    /// Department ID selector.
    pub department: Selector<String>,

    /// Lead (personnel ID) selector.
    pub lead: Selector<String>,

    /// Name search text. Matched as-is, without trimming.
    pub search: String,
}

impl FilterState {
    /// Creates a state with every selector at `all` and an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status selector.
    pub fn set_status(&mut self, status: Selector<ProjectStatus>) {
        self.status = status;
    }

    /// Sets the department selector.
    pub fn set_department(&mut self, department: Selector<String>) {
        self.department = department;
    }

    /// Sets the lead selector.
    pub fn set_lead(&mut self, lead: Selector<String>) {
        self.lead = lead;
    }

    /// Sets the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Returns the state with the status selector replaced.
    pub fn with_status(mut self, status: Selector<ProjectStatus>) -> Self {
        self.set_status(status);
        self
    }

    /// Returns the state with the department selector replaced.
    pub fn with_department(mut self, department: Selector<String>) -> Self {
        self.set_department(department);
        self
    }

    /// Returns the state with the lead selector replaced.
    pub fn with_lead(mut self, lead: Selector<String>) -> Self {
        self.set_lead(lead);
        self
    }

    /// Returns the state with the search text replaced.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true when no field constrains the result.
    pub fn is_unfiltered(&self) -> bool {
        self.status.is_all() && self.department.is_all() && self.lead.is_all() && self.search.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let state = FilterState::new();
        assert!(state.status.is_all());
        assert!(state.department.is_all());
        assert!(state.lead.is_all());
        assert!(state.search.is_empty());
        assert!(state.is_unfiltered());
    }

    #[test]
    fn test_setters_are_independent() {
        let mut state = FilterState::new();
        state.set_department(Selector::only("d1".to_string()));

        assert!(state.status.is_all());
        assert!(state.lead.is_all());
        assert!(state.search.is_empty());
        assert_eq!(state.department.value().map(String::as_str), Some("d1"));
    }

    #[test]
    fn test_whitespace_search_counts_as_filter() {
        let state = FilterState::new().with_search(" ");
        assert!(!state.is_unfiltered());
        assert_eq!(state.search, " ");
    }

    #[test]
    fn test_set_back_to_all() {
        let mut state = FilterState::new().with_lead(Selector::only("p1".to_string()));
        assert!(!state.is_unfiltered());

        state.set_lead(Selector::All);
        assert!(state.is_unfiltered());
    }

    #[test]
    fn test_reset() {
        let mut state = FilterState::new()
            .with_status(Selector::only(ProjectStatus::Done))
            .with_department(Selector::only("d1".to_string()))
            .with_lead(Selector::only("p1".to_string()))
            .with_search("zeus");

        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_serde_roundtrip_uses_sentinels() {
        let state = FilterState::new().with_status(Selector::only(ProjectStatus::OnHold));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "On Hold",
                "department": "all",
                "lead": "all",
                "search": ""
            })
        );

        let parsed: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let state: FilterState = serde_json::from_str(r#"{"search": "apo"}"#).unwrap();
        assert_eq!(state, FilterState::new().with_search("apo"));
    }
}
