//! Acceptance tests for project selection and the Project tab.

use crate::state::Tab;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn selected_id(harness: &AcceptanceTestHarness) -> String {
    harness
        .state()
        .projects
        .selected()
        .map(|project| project.id.to_string())
        .unwrap_or_default()
}

#[test]
fn startup_loads_projects_and_first_sources() {
    let mut harness = AcceptanceTestHarness::loaded(100, 30);

    let state = harness.state();
    assert!(!state.projects_loading);
    assert_eq!(state.projects.projects().len(), 3);
    assert_eq!(selected_id(&harness), "proj-1");
    assert_eq!(state.projects.visible_sources().map(<[_]>::len), Some(3));

    let screen = harness.render_to_string();
    assert!(screen.contains("Cortex Knowledge System"), "got:\n{screen}");
}

#[test]
fn project_tab_lists_sources_of_selection() {
    // GIVEN the Project tab
    let mut harness = AcceptanceTestHarness::loaded(100, 40);
    harness.send_key(KeyCode::Tab);
    assert_eq!(harness.state().active_tab, Tab::Project);

    // WHEN moving to the second project and waiting for its sources
    harness.send_key(KeyCode::Down);
    harness.wait_for(|state| state.projects.visible_sources().is_some());

    // THEN its details and sources are drawn
    assert_eq!(selected_id(&harness), "proj-2");
    let screen = harness.render_to_string();
    assert!(screen.contains("E-Commerce Platform"), "got:\n{screen}");
    assert!(screen.contains("1. ecommerce-backend"));
    assert!(screen.contains("Folder: E-Commerce Architecture"));
}

#[test]
fn returning_to_a_project_uses_cached_sources() {
    let mut harness = AcceptanceTestHarness::loaded(100, 40);
    harness.send_key(KeyCode::Down);
    harness.wait_for(|state| state.projects.visible_sources().is_some());

    // WHEN going back to the first project
    harness.send_key(KeyCode::Up);

    // THEN its sources show immediately, without waiting on a fetch
    assert_eq!(selected_id(&harness), "proj-1");
    assert_eq!(
        harness.state().projects.visible_sources().map(<[_]>::len),
        Some(3)
    );
}

#[test]
fn selection_clamps_at_both_ends() {
    let mut harness = AcceptanceTestHarness::loaded(100, 40);

    harness.send_key(KeyCode::Up);
    assert_eq!(selected_id(&harness), "proj-1");

    for _ in 0..5 {
        harness.send_key(KeyCode::Down);
    }
    assert_eq!(selected_id(&harness), "proj-3");
}

#[test]
fn refresh_reloads_current_project() {
    let mut harness = AcceptanceTestHarness::loaded(100, 40);
    harness.send_key(KeyCode::Tab);

    harness.send_key(KeyCode::Char('r'));
    assert!(harness.state().projects.visible_sources().is_none());

    harness.wait_for(|state| state.projects.visible_sources().is_some());
    assert_eq!(
        harness.state().projects.visible_sources().map(<[_]>::len),
        Some(3)
    );
}

#[test]
fn q_quits_from_project_tab_only() {
    let mut harness = AcceptanceTestHarness::loaded(100, 40);

    // On the Query tab 'q' is text
    harness.send_key(KeyCode::Char('q'));
    assert!(harness.is_running());
    assert_eq!(harness.state().input.value(), "q");

    harness.send_key(KeyCode::Tab);
    assert!(harness.send_key(KeyCode::Char('q')));
}
