//! Property tests for the filter engine over a shared sample portfolio.

use super::*;
use crate::Dataset;
use portfolio_model::models::{Department, Personnel, Project, ProjectStatus};

// ==================== Fixtures ====================

fn portfolio() -> Dataset {
    Dataset::new(
        vec![
            Project::new("1", "Apollo", "d1", "p1", ProjectStatus::Active)
                .with_description("Launch platform rebuild")
                .with_start_date("2024-03-01"),
            Project::new("2", "Zeus", "d2", "p2", ProjectStatus::Done),
            Project::new("3", "Artemis", "d1", "p2", ProjectStatus::Active),
            Project::new("4", "Hermes Alpha", "d3", "p1", ProjectStatus::OnHold),
            Project::new("5", "alpha centauri", "d2", "p404", ProjectStatus::Planning),
            Project::new("6", "Poseidon", "d404", "p1", ProjectStatus::Cancelled),
            Project::new("7", "Athena", "d1", "p1", ProjectStatus::Active),
        ],
        vec![
            Department::new("d1", "Engineering", "#3b82f6"),
            Department::new("d2", "Operations", "#10b981"),
            Department::new("d3", "Research", "#8b5cf6"),
        ],
        vec![
            Personnel::new("p1", "Ana", "Program Manager"),
            Personnel::new("p2", "Bao", "Tech Lead"),
        ],
    )
}

fn ids(rows: &[ProjectRow<'_>]) -> Vec<String> {
    rows.iter().map(|row| row.project.id.clone()).collect()
}

fn ids_for(dataset: &Dataset, state: &FilterState) -> Vec<String> {
    ids(&evaluate(dataset, state))
}

fn dept(id: &str) -> Selector<String> {
    Selector::only(id.to_string())
}

fn lead(id: &str) -> Selector<String> {
    Selector::only(id.to_string())
}

// ==================== Identity ====================

#[test]
fn test_default_state_returns_every_project_in_order() {
    let dataset = portfolio();
    let rows = evaluate(&dataset, &FilterState::default());

    assert_eq!(ids(&rows), vec!["1", "2", "3", "4", "5", "6", "7"]);
}

// ==================== Status Exactness ====================

#[test]
fn test_status_filter_returns_exactly_that_status() {
    let dataset = portfolio();

    for status in ProjectStatus::ALL {
        let state = FilterState::new().with_status(Selector::only(status));
        let rows = evaluate(&dataset, &state);

        let expected: Vec<String> = dataset
            .projects
            .iter()
            .filter(|p| p.status == status)
            .map(|p| p.id.clone())
            .collect();

        assert_eq!(ids(&rows), expected, "status {status}");
        assert!(rows.iter().all(|row| row.project.status == status));
    }
}

// ==================== Conjunction ====================

#[test]
fn test_two_filters_equal_intersection_of_each() {
    let dataset = portfolio();
    let single_states = vec![
        FilterState::new().with_status(Selector::only(ProjectStatus::Active)),
        FilterState::new().with_department(dept("d1")),
        FilterState::new().with_lead(lead("p1")),
        FilterState::new().with_search("a"),
    ];

    for (i, left) in single_states.iter().enumerate() {
        for right in single_states.iter().skip(i + 1) {
            let combined = FilterState {
                status: if left.status.is_all() { right.status } else { left.status },
                department: if left.department.is_all() {
                    right.department.clone()
                } else {
                    left.department.clone()
                },
                lead: if left.lead.is_all() {
                    right.lead.clone()
                } else {
                    left.lead.clone()
                },
                search: if left.search.is_empty() {
                    right.search.clone()
                } else {
                    left.search.clone()
                },
            };

            let left_ids = ids_for(&dataset, left);
            let right_ids = ids_for(&dataset, right);
            let intersection: Vec<String> = left_ids
                .iter()
                .filter(|id| right_ids.contains(id))
                .cloned()
                .collect();

            assert_eq!(
                ids_for(&dataset, &combined),
                intersection,
                "combining {left:?} with {right:?}"
            );
        }
    }
}

#[test]
fn test_all_four_filters_together() {
    let dataset = portfolio();
    let state = FilterState::new()
        .with_status(Selector::only(ProjectStatus::Active))
        .with_department(dept("d1"))
        .with_lead(lead("p1"))
        .with_search("THE");

    assert_eq!(ids_for(&dataset, &state), vec!["7"]);
}

// ==================== Search ====================

#[test]
fn test_search_case_variants_give_same_rows() {
    let dataset = portfolio();

    let lower = ids_for(&dataset, &FilterState::new().with_search("alpha"));
    let title = ids_for(&dataset, &FilterState::new().with_search("Alpha"));
    let upper = ids_for(&dataset, &FilterState::new().with_search("ALPHA"));

    assert_eq!(lower, vec!["4", "5"]);
    assert_eq!(lower, title);
    assert_eq!(lower, upper);
}

#[test]
fn test_search_is_name_only_and_untrimmed() {
    let dataset = portfolio();

    // "platform" only appears in Apollo's description
    assert!(ids_for(&dataset, &FilterState::new().with_search("platform")).is_empty());
    assert!(ids_for(&dataset, &FilterState::new().with_search(" apollo")).is_empty());
    assert_eq!(
        ids_for(&dataset, &FilterState::new().with_search("apollo")),
        vec!["1"]
    );
}

#[test]
fn test_search_without_match_returns_empty() {
    let dataset = portfolio();
    let rows = evaluate(&dataset, &FilterState::new().with_search("no such project"));
    assert!(rows.is_empty());
}

// ==================== Stability ====================

#[test]
fn test_matches_keep_input_order() {
    let mut dataset = portfolio();
    dataset.projects.reverse();

    let state = FilterState::new().with_lead(lead("p1"));
    assert_eq!(ids_for(&dataset, &state), vec!["7", "6", "4", "1"]);
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let dataset = portfolio();
    let state = FilterState::new().with_department(dept("d2"));

    let first = evaluate(&dataset, &state);
    let second = evaluate(&dataset, &state);
    assert_eq!(first, second);
}

// ==================== Foreign-Key Resolution ====================

#[test]
fn test_missing_department_keeps_row() {
    let dataset = portfolio();
    let rows = evaluate(&dataset, &FilterState::new().with_search("poseidon"));

    assert_eq!(rows.len(), 1);
    assert!(rows[0].department.is_none());
    assert_eq!(rows[0].department_name(), MISSING_LABEL);
    assert_eq!(rows[0].lead_name(), "Ana");
}

#[test]
fn test_missing_lead_keeps_row() {
    let dataset = portfolio();
    let rows = evaluate(&dataset, &FilterState::new().with_department(dept("d2")));

    assert_eq!(ids(&rows), vec!["2", "5"]);
    assert_eq!(rows[0].lead_name(), "Bao");
    assert!(rows[1].lead.is_none());
    assert_eq!(rows[1].lead_initial(), None);
    assert_eq!(rows[1].department_name(), "Operations");
}

#[test]
fn test_duplicate_ids_resolve_to_first() {
    let mut dataset = portfolio();
    dataset
        .departments
        .push(Department::new("d1", "Engineering (archived)", "#000000"));
    dataset.personnel.insert(0, Personnel::new("p2", "Bao (new)", "CTO"));

    let rows = evaluate(&dataset, &FilterState::new().with_search("artemis"));
    assert_eq!(rows[0].department_name(), "Engineering");
    assert_eq!(rows[0].lead_name(), "Bao (new)");
}

#[test]
fn test_empty_collections_are_valid() {
    let dataset = Dataset::default();
    assert!(evaluate(&dataset, &FilterState::default()).is_empty());

    let projects_only = Dataset::new(portfolio().projects, vec![], vec![]);
    let rows = evaluate(&projects_only, &FilterState::default());
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|r| r.department.is_none() && r.lead.is_none()));
}

// ==================== Reference Scenario ====================

#[test]
fn test_apollo_zeus_scenario() {
    let dataset = Dataset::new(
        vec![
            Project::new("1", "Apollo", "d1", "p1", ProjectStatus::Active),
            Project::new("2", "Zeus", "d2", "p2", ProjectStatus::Done),
        ],
        vec![Department::new("d1", "Eng", "")],
        vec![Personnel::new("p1", "Ana", "")],
    );
    let state = FilterState::new()
        .with_status(Selector::only(ProjectStatus::Active))
        .with_search("apo");

    let rows = evaluate(&dataset, &state);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].project.id, "1");
    assert_eq!(rows[0].department, Some(&dataset.departments[0]));
    assert_eq!(rows[0].lead, Some(&dataset.personnel[0]));
}

// ==================== View + Options ====================

#[test]
fn test_view_matches_engine() {
    let dataset = portfolio();
    let state = FilterState::new().with_status(Selector::only(ProjectStatus::Active));
    let expected = ids_for(&dataset, &state);

    let mut view = ProjectListView::with_state(dataset, state);
    assert_eq!(ids(&view.rows()), expected);
}

#[test]
fn test_every_option_value_parses_back_into_a_selector() {
    let dataset = portfolio();
    let options = FilterOptions::from_context(&dataset.context());

    for choice in &options.statuses {
        let selector: Selector<ProjectStatus> = choice.value.parse().unwrap();
        assert_eq!(selector.is_all(), choice.is_all());
    }
    for choice in options.departments.iter().chain(&options.personnel) {
        let selector: Selector<String> = choice.value.parse().unwrap();
        assert_eq!(selector.is_all(), choice.is_all());
    }
}
