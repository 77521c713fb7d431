//! Property-based tests for the chat viewport.
//!
//! Random operation sequences are applied to a sized viewport and the
//! bookkeeping (offsets, follow mode, collapse flags) is checked against
//! what `rendered_lines` actually produces.

use crate::view_state::{ChatViewport, CollapseScope, Direction};
use chrono::Utc;
use proptest::prelude::*;

const CHROME: usize = 9;

// ===== Arbitrary Strategies =====

#[derive(Debug, Clone)]
enum Op {
    Ask(String),
    Answer(String),
    Navigate(Direction),
    Toggle(CollapseScope),
    Resize(u16, u16),
    ScrollBy(isize),
    Bottom,
}

/// Text of one to several words, sometimes with a word longer than any width.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            8 => "[a-z]{1,10}",
            1 => "[a-z]{30,60}",
            1 => Just("\n".to_string()),
        ],
        1..25,
    )
    .prop_map(|words| words.join(" "))
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

fn arb_scope() -> impl Strategy<Value = CollapseScope> {
    prop_oneof![Just(CollapseScope::Selected), Just(CollapseScope::All)]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_text().prop_map(Op::Ask),
        3 => arb_text().prop_map(Op::Answer),
        2 => arb_direction().prop_map(Op::Navigate),
        1 => arb_scope().prop_map(Op::Toggle),
        1 => (1u16..200, 1u16..80).prop_map(|(w, h)| Op::Resize(w, h)),
        1 => (-30isize..30).prop_map(Op::ScrollBy),
        1 => Just(Op::Bottom),
    ]
}

fn apply(viewport: &mut ChatViewport, op: Op) {
    match op {
        Op::Ask(text) => {
            viewport.append_query(&text);
        }
        Op::Answer(text) => {
            viewport.on_response_received(&text, Utc::now());
        }
        Op::Navigate(direction) => viewport.navigate(direction),
        Op::Toggle(scope) => viewport.toggle_collapse(scope),
        Op::Resize(width, height) => viewport.resize(width, height),
        Op::ScrollBy(delta) => viewport.scroll_by(delta),
        Op::Bottom => viewport.scroll_to_bottom(),
    }
}

fn viewport_after(ops: Vec<Op>, width: u16, height: u16) -> ChatViewport {
    let mut viewport = ChatViewport::new(CHROME);
    viewport.resize(width, height);
    for op in ops {
        apply(&mut viewport, op);
    }
    viewport
}

// ===== Properties =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// offset_of(i) equals the number of rendered lines owned by earlier pairs.
    #[test]
    fn offset_of_matches_rendered_lines(
        ops in prop::collection::vec(arb_op(), 0..40),
        width in 1u16..200,
        height in 1u16..80,
    ) {
        let viewport = viewport_after(ops, width, height);
        let lines = viewport.rendered_lines();

        prop_assert_eq!(lines.len(), viewport.total_lines());
        for index in 0..viewport.len() {
            let before = lines.iter().filter(|line| line.pair_index < index).count();
            prop_assert_eq!(viewport.offset_of(index), before);
        }
        prop_assert_eq!(viewport.offset_of(viewport.len()), 0);
    }

    /// The offset never passes the bottom anchor, and following means sitting on it.
    #[test]
    fn offset_stays_in_range_and_follow_sits_at_bottom(
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let viewport = viewport_after(ops, 80, 30);
        prop_assert!(viewport.scroll_offset() <= viewport.max_offset());
        if viewport.is_following() {
            prop_assert_eq!(viewport.scroll_offset(), viewport.max_offset());
        }
        let expected = viewport
            .visible_height()
            .min(viewport.total_lines() - viewport.scroll_offset());
        prop_assert_eq!(viewport.visible_lines().len(), expected);
    }

    /// Toggling all twice restores a uniform collapse state.
    #[test]
    fn toggle_all_twice_restores_uniform_state(
        questions in prop::collection::vec(arb_text(), 1..10),
        start_collapsed in any::<bool>(),
    ) {
        let mut viewport = ChatViewport::new(CHROME);
        viewport.resize(80, 30);
        for question in &questions {
            viewport.append_query(question);
            viewport.on_response_received("answer", Utc::now());
        }
        if start_collapsed {
            viewport.toggle_collapse(CollapseScope::All);
        }
        let before: Vec<bool> = viewport.pairs().iter().map(|p| p.collapsed).collect();

        viewport.toggle_collapse(CollapseScope::All);
        viewport.toggle_collapse(CollapseScope::All);

        let after: Vec<bool> = viewport.pairs().iter().map(|p| p.collapsed).collect();
        prop_assert_eq!(before, after);
    }

    /// Down with no cursor selects the newest pair and stays at the bottom.
    #[test]
    fn navigate_down_from_latest_keeps_following(
        ops in prop::collection::vec(arb_op(), 0..30),
        question in arb_text(),
    ) {
        let mut viewport = viewport_after(ops, 80, 30);
        prop_assume!(viewport.append_query(&question).is_some());

        viewport.navigate(Direction::Down);

        prop_assert_eq!(viewport.cursor(), Some(viewport.len() - 1));
        prop_assert!(viewport.is_following());
        prop_assert_eq!(viewport.scroll_offset(), viewport.max_offset());
    }

    /// Clearing then asking leaves exactly one pending pair at the top.
    #[test]
    fn clear_then_append_starts_fresh(
        ops in prop::collection::vec(arb_op(), 0..30),
        question in "[a-z]{1,10}( [a-z]{1,10}){0,5}",
    ) {
        let mut viewport = viewport_after(ops, 80, 30);

        viewport.clear();
        let index = viewport.append_query(&question);

        prop_assert_eq!(index, Some(0));
        prop_assert_eq!(viewport.len(), 1);
        prop_assert!(viewport.pairs()[0].is_pending());
        prop_assert_eq!(viewport.offset_of(0), 0);
        prop_assert_eq!(viewport.cursor(), None);
        prop_assert!(viewport.is_following());
    }
}
