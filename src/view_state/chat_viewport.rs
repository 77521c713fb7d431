//! Chat viewport engine.
//!
//! Owns the message-pair history together with everything needed to place
//! it on screen: the wrap width, the visible line budget, the vertical
//! scroll offset, the message cursor and the follow flag.
//!
//! # Rendered layout
//!
//! Each pair renders as:
//! - one query line, always
//! - collapsed: one status line
//! - expanded with a response: header, wrapped body lines, timestamp
//! - expanded and pending: one pending-indicator line
//!
//! [`ChatViewport::offset_of`] and [`ChatViewport::rendered_lines`] are both
//! derived from this layout, so a scroll offset always lands exactly on the
//! first line of its pair.

use crate::model::{Message, MessagePair, Role};
use chrono::{DateTime, Local, Utc};

/// Columns reserved left of wrapped text (selection marker plus indent).
pub const CHAT_GUTTER: usize = 4;

/// Smallest width text is ever wrapped at.
pub const MIN_WRAP_WIDTH: usize = 10;

/// Smallest visible line budget, regardless of terminal height.
pub const MIN_VISIBLE_LINES: usize = 5;

/// Message cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards older pairs.
    Up,
    /// Towards newer pairs.
    Down,
}

/// Which pairs a collapse toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseScope {
    /// The cursor's pair, or the newest pair when there is no cursor.
    Selected,
    /// Every pair, driven towards a uniform state.
    All,
}

/// Role of a rendered chat line, used by the view to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Query line of an unselected pair.
    Query,
    /// Query line of the pair under the cursor.
    SelectedQuery,
    /// Status line of a collapsed pair.
    CollapsedStatus,
    /// `Assistant:` header above a response.
    ResponseHeader,
    /// One wrapped line of response text.
    ResponseBody,
    /// Time the response arrived.
    Timestamp,
    /// Placeholder while the response is pending.
    Pending,
}

/// One line of chat content with its owning pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Index of the pair this line belongs to.
    pub pair_index: usize,
    /// What the line shows.
    pub kind: LineKind,
    /// Unstyled text, without gutter.
    pub text: String,
}

impl RenderedLine {
    fn new(pair_index: usize, kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            pair_index,
            kind,
            text: text.into(),
        }
    }

    /// Left margin drawn before the text: selection marker or indent.
    pub fn gutter(&self) -> &'static str {
        match self.kind {
            LineKind::SelectedQuery => "▸ ",
            LineKind::Query => "  ",
            _ => "    ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    width: usize,
    height: usize,
}

/// Scrollable chat history with cursor and follow mode.
///
/// Every operation is a no-op until the first [`resize`](Self::resize).
#[derive(Debug, Clone)]
pub struct ChatViewport {
    history: Vec<MessagePair>,
    chrome_height: usize,
    geometry: Option<Geometry>,
    offset: usize,
    cursor: Option<usize>,
    follow: bool,
}

impl ChatViewport {
    /// Create an empty viewport. `chrome_height` lines of the terminal are
    /// taken by everything other than the chat window.
    pub fn new(chrome_height: usize) -> Self {
        Self {
            history: Vec::new(),
            chrome_height,
            geometry: None,
            offset: 0,
            cursor: None,
            follow: true,
        }
    }

    // ===== Accessors =====

    /// Whether the viewport has received its first size.
    pub fn is_ready(&self) -> bool {
        self.geometry.is_some()
    }

    /// Message pairs, oldest first.
    pub fn pairs(&self) -> &[MessagePair] {
        &self.history
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Selected pair, `None` while tracking the latest.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether the viewport sticks to the newest content.
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// First visible rendered line.
    pub fn scroll_offset(&self) -> usize {
        self.offset
    }

    /// Visible line budget (0 before the first resize).
    pub fn visible_height(&self) -> usize {
        self.geometry.map_or(0, |g| g.height)
    }

    /// Terminal width last seen (0 before the first resize).
    pub fn width(&self) -> usize {
        self.geometry.map_or(0, |g| g.width)
    }

    /// Width message text is wrapped at.
    pub fn wrap_width(&self) -> usize {
        wrap_width_for(self.width())
    }

    /// Whether the newest pair still waits for its response.
    pub fn is_awaiting_response(&self) -> bool {
        self.history.last().is_some_and(MessagePair::is_pending)
    }

    /// Total rendered lines.
    pub fn total_lines(&self) -> usize {
        let width = self.wrap_width();
        self.history
            .iter()
            .map(|pair| pair_height(pair, width))
            .sum()
    }

    /// Largest valid scroll offset (the bottom anchor).
    pub fn max_offset(&self) -> usize {
        self.total_lines().saturating_sub(self.visible_height())
    }

    // ===== Operations =====

    /// Append a pending pair for `content` and jump to the bottom.
    ///
    /// Returns the new pair's index, or `None` when the query is blank or
    /// the viewport has no size yet.
    pub fn append_query(&mut self, content: &str) -> Option<usize> {
        self.geometry?;
        if content.trim().is_empty() {
            return None;
        }

        let query = Message::new(Role::User, content.trim(), Utc::now());
        self.history.push(MessagePair::pending(query));

        self.follow = true;
        self.cursor = None;
        self.scroll_to_bottom();
        Some(self.history.len() - 1)
    }

    /// Fill the newest pair's response.
    ///
    /// Returns `false` when there is no pair or the newest pair is already
    /// answered. Blank content leaves the pair pending. The scroll offset
    /// moves only in follow mode.
    pub fn on_response_received(&mut self, content: &str, timestamp: DateTime<Utc>) -> bool {
        let Some(geometry) = self.geometry else {
            return false;
        };
        let Some(last) = self.history.last_mut() else {
            return false;
        };
        if !last.is_pending() {
            return false;
        }

        if !content.trim().is_empty() {
            let mut response = Message::new(Role::Assistant, content, timestamp);
            response.rewrap(wrap_width_for(geometry.width));
            last.response = Some(response);
        }

        if self.follow {
            self.scroll_to_bottom();
        }
        true
    }

    /// Move the cursor one pair up or down.
    pub fn navigate(&mut self, direction: Direction) {
        if !self.is_ready() || self.history.is_empty() {
            return;
        }
        let last = self.history.len() - 1;

        match (self.cursor, direction) {
            (None, Direction::Up) => self.anchor_to(last),
            (None, Direction::Down) => {
                self.cursor = Some(last);
                self.follow = true;
                self.scroll_to_bottom();
            }
            (Some(current), Direction::Up) => self.anchor_to(current.saturating_sub(1)),
            (Some(current), Direction::Down) if current < last => self.anchor_to(current + 1),
            (Some(_), Direction::Down) => {
                self.cursor = Some(last);
                self.follow = true;
                self.scroll_to_bottom();
            }
        }
    }

    /// Flip collapse flags, then rewrap and restore the scroll position.
    pub fn toggle_collapse(&mut self, scope: CollapseScope) {
        if !self.is_ready() || self.history.is_empty() {
            return;
        }

        match scope {
            CollapseScope::Selected => {
                let index = self.cursor.unwrap_or(self.history.len() - 1);
                if let Some(pair) = self.history.get_mut(index) {
                    pair.collapsed = !pair.collapsed;
                }
            }
            CollapseScope::All => {
                let target = self.history.iter().any(|pair| !pair.collapsed);
                for pair in &mut self.history {
                    pair.collapsed = target;
                }
            }
        }

        self.rewrap_all();
        self.restore_position();
    }

    /// Apply a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        let height = usize::from(height)
            .saturating_sub(self.chrome_height)
            .max(MIN_VISIBLE_LINES);
        self.geometry = Some(Geometry {
            width: usize::from(width),
            height,
        });

        self.rewrap_all();
        self.restore_position();
    }

    /// Rendered lines strictly before `pair_index` (0 when out of range).
    pub fn offset_of(&self, pair_index: usize) -> usize {
        if pair_index >= self.history.len() {
            return 0;
        }
        let width = self.wrap_width();
        self.history[..pair_index]
            .iter()
            .map(|pair| pair_height(pair, width))
            .sum()
    }

    /// Drop the whole history.
    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = None;
        self.follow = true;
        self.offset = 0;
    }

    /// Scroll by `delta` lines (negative is up), clamped to the content.
    ///
    /// Landing on the bottom anchor turns follow mode on, anywhere else
    /// turns it off.
    pub fn scroll_by(&mut self, delta: isize) {
        if !self.is_ready() {
            return;
        }
        let max = self.max_offset();
        let target = self.offset.saturating_add_signed(delta).min(max);
        self.offset = target;
        self.follow = target == max;
    }

    /// Jump to the newest content and follow it.
    pub fn scroll_to_bottom(&mut self) {
        if !self.is_ready() {
            return;
        }
        self.follow = true;
        self.offset = self.max_offset();
    }

    // ===== Rendering =====

    /// All chat lines in display order.
    pub fn rendered_lines(&self) -> Vec<RenderedLine> {
        let width = self.wrap_width();
        let mut lines = Vec::with_capacity(self.total_lines());
        for (index, pair) in self.history.iter().enumerate() {
            self.push_pair_lines(index, pair, width, &mut lines);
        }
        lines
    }

    /// Lines inside the visible window.
    pub fn visible_lines(&self) -> Vec<RenderedLine> {
        self.rendered_lines()
            .into_iter()
            .skip(self.offset)
            .take(self.visible_height())
            .collect()
    }

    /// Flattened chat text with selection markers.
    pub fn to_plain_text(&self) -> String {
        self.rendered_lines()
            .iter()
            .map(|line| format!("{}{}", line.gutter(), line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ===== Internals =====

    fn push_pair_lines(
        &self,
        index: usize,
        pair: &MessagePair,
        width: usize,
        out: &mut Vec<RenderedLine>,
    ) {
        let query_kind = if !self.follow && self.cursor == Some(index) {
            LineKind::SelectedQuery
        } else {
            LineKind::Query
        };
        out.push(RenderedLine::new(
            index,
            query_kind,
            format!(
                "({}) {}: {}",
                clock(pair.query.timestamp()),
                pair.query.role().label(),
                pair.query.content()
            ),
        ));

        if pair.collapsed {
            let status = if pair.is_pending() {
                "▸ Awaiting response (collapsed)"
            } else {
                "▸ Response collapsed (Ctrl+K to expand)"
            };
            out.push(RenderedLine::new(index, LineKind::CollapsedStatus, status));
            return;
        }

        match &pair.response {
            Some(response) => {
                out.push(RenderedLine::new(
                    index,
                    LineKind::ResponseHeader,
                    format!("{}:", response.role().label()),
                ));
                out.extend(
                    response
                        .lines_at(width)
                        .into_iter()
                        .map(|line| RenderedLine::new(index, LineKind::ResponseBody, line)),
                );
                out.push(RenderedLine::new(
                    index,
                    LineKind::Timestamp,
                    clock(response.timestamp()),
                ));
            }
            None => out.push(RenderedLine::new(index, LineKind::Pending, "⏳ Thinking...")),
        }
    }

    fn rewrap_all(&mut self) {
        let width = self.wrap_width();
        for pair in &mut self.history {
            pair.rewrap(width);
        }
    }

    /// Select `index`, leave follow mode and put its first line on top.
    fn anchor_to(&mut self, index: usize) {
        self.cursor = Some(index);
        self.follow = false;
        self.offset = self.offset_of(index).min(self.max_offset());
    }

    fn restore_position(&mut self) {
        if self.follow {
            self.scroll_to_bottom();
        } else if let Some(index) = self.cursor {
            self.offset = self.offset_of(index).min(self.max_offset());
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }
}

fn wrap_width_for(width: usize) -> usize {
    width.saturating_sub(CHAT_GUTTER).max(MIN_WRAP_WIDTH)
}

fn pair_height(pair: &MessagePair, width: usize) -> usize {
    let body = if pair.collapsed {
        1
    } else {
        match &pair.response {
            Some(response) => 1 + response.line_count_at(width) + 1,
            None => 1,
        }
    };
    1 + body
}

fn clock(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
#[path = "chat_viewport_tests.rs"]
mod tests;
