//! Tests for tab navigation handler.
//!
//! Tests verify that:
//! - NextTab and PrevTab both toggle between the two tabs
//! - Other actions leave the tab alone
//! - Entering the Query tab applies a resize the chat missed while hidden

use super::*;
use crate::config::keybindings::KeyBindings;
use crate::view::constants::QUERY_TAB_CHROME_HEIGHT;

fn state() -> AppState {
    AppState::new(KeyBindings::default())
}

// ===== Toggle =====

#[test]
fn next_tab_toggles_both_ways() {
    let mut state = state();

    handle_tab_action(&mut state, KeyAction::NextTab);
    assert_eq!(state.active_tab, Tab::Project);

    handle_tab_action(&mut state, KeyAction::NextTab);
    assert_eq!(state.active_tab, Tab::Query);
}

#[test]
fn prev_tab_toggles_both_ways() {
    let mut state = state();

    handle_tab_action(&mut state, KeyAction::PrevTab);
    assert_eq!(state.active_tab, Tab::Project);

    handle_tab_action(&mut state, KeyAction::PrevTab);
    assert_eq!(state.active_tab, Tab::Query);
}

#[test]
fn other_actions_do_not_switch() {
    let mut state = state();
    handle_tab_action(&mut state, KeyAction::ToggleCollapse);
    assert_eq!(state.active_tab, Tab::Query);
}

#[test]
fn tab_metadata_is_consistent() {
    for (position, tab) in Tab::ALL.iter().enumerate() {
        assert_eq!(tab.index(), position);
        assert_eq!(tab.toggled().toggled(), *tab);
    }
    assert_eq!(Tab::Query.title(), "Query");
    assert_eq!(Tab::Project.title(), "Project");
}

// ===== Geometry sync =====

#[test]
fn entering_query_tab_applies_missed_resize() {
    // GIVEN the user is on the Project tab when the terminal is resized
    let mut state = state();
    handle_tab_action(&mut state, KeyAction::NextTab);
    state.terminal_size = Some((100, 40));
    assert!(!state.chat.is_ready());

    // WHEN switching back to the Query tab
    handle_tab_action(&mut state, KeyAction::PrevTab);

    // THEN the chat has the new geometry
    assert!(state.chat.is_ready());
    assert_eq!(state.chat.width(), 100);
    assert_eq!(state.chat.visible_height(), 40 - QUERY_TAB_CHROME_HEIGHT);
}

#[test]
fn entering_query_tab_with_current_geometry_keeps_chat() {
    // GIVEN a sized chat with history scrolled away from the bottom
    let mut state = state();
    state.terminal_size = Some((60, 14));
    state.sync_chat_geometry();
    for question in ["one", "two", "three"] {
        state.chat.append_query(question);
        state.chat.on_response_received("answer", chrono::Utc::now());
    }
    state.chat.scroll_by(-2);
    let offset = state.chat.scroll_offset();

    // WHEN leaving and returning without a resize
    handle_tab_action(&mut state, KeyAction::NextTab);
    handle_tab_action(&mut state, KeyAction::PrevTab);

    // THEN nothing was reapplied
    assert!(!state.chat_geometry_stale());
    assert_eq!(state.chat.scroll_offset(), offset);
}
