//! Project and query response types returned by the data source.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

// ===== ProjectId =====

/// Identifier of a project known to the data source (e.g. `proj-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct ProjectId(String);

/// Error returned when a project id is empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("project id must not be empty")]
pub struct InvalidProjectId;

impl ProjectId {
    /// Smart constructor: validates a non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidProjectId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(InvalidProjectId)
        } else {
            Ok(Self(raw))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = InvalidProjectId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Project =====

/// A software project the assistant can answer questions about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Stable identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

// ===== QueryResponse =====

/// Answer to a submitted query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    /// Assistant answer text, may contain line breaks.
    #[serde(rename = "response")]
    pub response_text: String,
    /// When the answer was produced.
    pub timestamp: DateTime<Utc>,
}
