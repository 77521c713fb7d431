//! Acceptance tests for asking questions on the Query tab.
//!
//! Each test drives the full stack: key events through the dispatcher,
//! commands through the gateway onto a tokio runtime, completions back
//! through the channel, and a render into a TestBackend.

use crate::backend::dummy::canned_answer;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

fn ask(harness: &mut AcceptanceTestHarness, question: &str) {
    harness.type_text(question);
    harness.send_key(KeyCode::Enter);
}

fn ask_and_wait(harness: &mut AcceptanceTestHarness, question: &str) {
    ask(harness, question);
    harness.wait_for(|state| !state.query_in_flight);
}

// ===== Asking =====

#[test]
fn question_gets_keyword_answer() {
    // GIVEN a loaded app
    let mut harness = AcceptanceTestHarness::loaded(100, 30);

    // WHEN asking about authentication
    ask_and_wait(&mut harness, "How does authentication work?");

    // THEN the answer is the canned authentication answer
    let pair = &harness.state().chat.pairs()[0];
    assert_eq!(pair.query.content(), "How does authentication work?");
    let response = pair.response.as_ref().expect("answered");
    assert_eq!(response.content(), canned_answer("authentication"));
    assert!(harness.state().input.is_empty());

    let screen = harness.render_to_string();
    assert!(screen.contains("You: How does authentication work?"), "got:\n{screen}");
    assert!(screen.contains("Assistant:"));
}

#[test]
fn second_submit_is_refused_while_in_flight() {
    // GIVEN a slow data source and one question in flight
    let mut harness = AcceptanceTestHarness::start_with_latency(100, 30, Duration::from_millis(300));
    harness.wait_for(|state| state.projects.selected().is_some());
    ask(&mut harness, "first");
    assert!(harness.state().query_in_flight);

    // WHEN submitting again
    ask(&mut harness, "second");

    // THEN only one pair exists and the draft is kept
    assert_eq!(harness.state().chat.len(), 1);
    assert_eq!(harness.state().input.value(), "second");

    // AND the answer lands on the first pair
    harness.wait_for(|state| !state.query_in_flight);
    let pair = &harness.state().chat.pairs()[0];
    assert_eq!(pair.query.content(), "first");
    assert!(pair.response.is_some());
}

#[test]
fn long_answer_follows_to_bottom() {
    let mut harness = AcceptanceTestHarness::loaded(60, 16);

    ask_and_wait(&mut harness, "explain the database");
    ask_and_wait(&mut harness, "and testing?");

    let chat = &harness.state().chat;
    assert!(chat.is_following());
    assert_eq!(chat.scroll_offset(), chat.max_offset());
    assert!(chat.max_offset() > 0, "answers overflow a small window");
}

// ===== Navigation =====

#[test]
fn navigating_up_leaves_follow_and_end_returns() {
    let mut harness = AcceptanceTestHarness::loaded(80, 20);
    ask_and_wait(&mut harness, "architecture overview");
    ask_and_wait(&mut harness, "what about testing");

    // WHEN moving the cursor into history
    harness.send_key_with_mods(KeyCode::Up, KeyModifiers::CONTROL);
    harness.send_key_with_mods(KeyCode::Up, KeyModifiers::CONTROL);

    // THEN the first pair is on top and follow is off
    let chat = &harness.state().chat;
    assert_eq!(chat.cursor(), Some(0));
    assert!(!chat.is_following());
    assert_eq!(chat.scroll_offset(), 0);

    // WHEN jumping to latest
    harness.send_key(KeyCode::End);

    // THEN the view follows again
    let chat = &harness.state().chat;
    assert!(chat.is_following());
    assert_eq!(chat.scroll_offset(), chat.max_offset());
}

#[test]
fn clear_chat_empties_history() {
    let mut harness = AcceptanceTestHarness::loaded(80, 24);
    ask_and_wait(&mut harness, "hello");

    harness.send_key_with_mods(KeyCode::Char('l'), KeyModifiers::CONTROL);

    assert!(harness.state().chat.is_empty());
    let screen = harness.render_to_string();
    assert!(screen.contains("No messages yet"), "got:\n{screen}");
}

// ===== Geometry =====

#[test]
fn resize_while_on_project_tab_reaches_chat_on_return() {
    // GIVEN the Project tab is active
    let mut harness = AcceptanceTestHarness::loaded(80, 24);
    ask_and_wait(&mut harness, "hello");
    harness.send_key(KeyCode::Tab);

    // WHEN the terminal shrinks while the chat is hidden
    harness.resize(50, 20);
    assert_eq!(harness.state().chat.width(), 80);

    // THEN returning to the Query tab applies the new size
    harness.send_key(KeyCode::BackTab);
    assert_eq!(harness.state().chat.width(), 50);
    assert_eq!(harness.state().chat.visible_height(), 20 - 9);
    let screen = harness.render_to_string();
    assert!(screen.contains("Query:"), "got:\n{screen}");
}

#[test]
fn ctrl_c_quits() {
    let mut harness = AcceptanceTestHarness::start(80, 24);
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}
