//! View-state layer - chat layout, wrapping and scrolling
//!
//! This module holds the state the renderer needs but that is not part of
//! the domain model: wrapped text, scroll offsets and the message cursor.
//!
//! # Module Structure
//!
//! - `wrap`: pure greedy word wrapping measured in terminal columns
//! - `chat_viewport`: ChatViewport - message history, offsets, cursor and follow mode

pub mod chat_viewport;
pub mod wrap;

pub use chat_viewport::{
    ChatViewport, CollapseScope, Direction, LineKind, RenderedLine, CHAT_GUTTER, MIN_VISIBLE_LINES,
    MIN_WRAP_WIDTH,
};
pub use wrap::wrap;
