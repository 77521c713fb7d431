//! Chat message types.
//!
//! A chat is an ordered sequence of [`MessagePair`]s: one user query and its
//! (possibly still pending) assistant response.

use chrono::{DateTime, Utc};

// ===== Role =====

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Query typed by the user.
    User,
    /// Answer produced by the assistant.
    Assistant,
}

impl Role {
    /// Speaker label shown in the chat.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

// ===== WrapCache =====

/// Wrapped lines of a message, valid for exactly one wrap width.
///
/// Filled eagerly when content arrives and rebuilt on every rewrap.
/// A lookup at any other width is a cache miss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapCache {
    width: usize,
    lines: Option<Vec<String>>,
}

impl WrapCache {
    /// Cached lines if they were computed for `width`.
    pub fn get(&self, width: usize) -> Option<&[String]> {
        match &self.lines {
            Some(lines) if self.width == width => Some(lines),
            _ => None,
        }
    }

    /// Store lines computed for `width`, replacing any previous entry.
    pub fn store(&mut self, width: usize, lines: Vec<String>) {
        self.width = width;
        self.lines = Some(lines);
    }
}

// ===== Message =====

/// A single chat message with a derived wrap cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
    timestamp: DateTime<Utc>,
    wrapped: WrapCache,
}

impl Message {
    /// Create a message with an empty wrap cache.
    pub fn new(role: Role, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
            wrapped: WrapCache::default(),
        }
    }

    /// Author of the message.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Raw message text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the message was created (query) or answered (response).
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Wrap cache for this message.
    pub fn wrapped(&self) -> &WrapCache {
        &self.wrapped
    }

    /// Rebuild the wrap cache at `width`.
    pub fn rewrap(&mut self, width: usize) {
        let lines = crate::view_state::wrap::wrap(&self.content, width);
        self.wrapped.store(width, lines);
    }

    /// Wrapped lines at `width`, served from cache when fresh.
    ///
    /// On a cache miss the lines are computed on the fly with the same
    /// wrapping function used to fill the cache, so both paths agree.
    pub fn lines_at(&self, width: usize) -> Vec<String> {
        match self.wrapped.get(width) {
            Some(lines) => lines.to_vec(),
            None => crate::view_state::wrap::wrap(&self.content, width),
        }
    }

    /// Number of wrapped lines at `width`.
    pub fn line_count_at(&self, width: usize) -> usize {
        match self.wrapped.get(width) {
            Some(lines) => lines.len(),
            None => crate::view_state::wrap::wrap(&self.content, width).len(),
        }
    }
}

// ===== MessagePair =====

/// One user query and its assistant response.
///
/// `response == None` means the answer is still pending. A blank answer is
/// never stored, so an empty response and a pending one look the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePair {
    /// The user's query.
    pub query: Message,
    /// The assistant's answer, `None` while pending.
    pub response: Option<Message>,
    /// Whether the pair renders in its two-line collapsed form.
    pub collapsed: bool,
}

impl MessagePair {
    /// Create an expanded, pending pair for `query`.
    pub fn pending(query: Message) -> Self {
        Self {
            query,
            response: None,
            collapsed: false,
        }
    }

    /// Whether the response has not arrived yet.
    pub fn is_pending(&self) -> bool {
        self.response.is_none()
    }

    /// Rebuild the response's wrap cache at `width`.
    ///
    /// The query always renders on a single line and is never wrapped.
    pub fn rewrap(&mut self, width: usize) {
        if let Some(response) = self.response.as_mut() {
            response.rewrap(width);
        }
    }
}
