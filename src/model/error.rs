//! Error types for cortex-tui.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all failure modes
//!   - [`TransportError`] - Data source failures (fetch projects, sources, queries)
//!   - [`InputValidationError`] - Rejected user input (empty query, no project)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Transport errors are **non-fatal**: they are logged, surfaced in the status
//! line, and the operation that produced them is abandoned. Engine state is never
//! left half-applied because task bodies never touch UI state.
//! Input validation errors are silently ignored (debug log only).
//! Only terminal errors are fatal.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A data source request failed.
    ///
    /// **Recovery**: Non-fatal. Recorded in `AppState::last_error` and logged.
    #[error("Data source error: {0}")]
    Transport(#[from] TransportError),

    /// User input was rejected before reaching the data source.
    ///
    /// **Recovery**: Ignored silently; the input line keeps its content.
    #[error("Invalid input: {0}")]
    InputValidation(#[from] InputValidationError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Fatal. Restore the terminal and exit with a message on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors produced by the data source collaborator.
///
/// Every variant carries enough context to be shown to the user verbatim
/// in the status line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The data source could not be reached.
    #[error("Cannot reach {endpoint}: {reason}")]
    Unreachable {
        /// Endpoint (base URL or operation name) that failed.
        endpoint: String,
        /// Human-readable failure reason.
        reason: String,
    },

    /// The request did not complete in time.
    #[error("Request to {endpoint} timed out after {millis} ms")]
    Timeout {
        /// Endpoint (base URL or operation name) that timed out.
        endpoint: String,
        /// Elapsed milliseconds before giving up.
        millis: u64,
    },

    /// The data source answered but refused the request.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The data source answered with a payload that could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Reasons a user-submitted query is refused before it reaches the data source.
///
/// These are never surfaced to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputValidationError {
    /// The query is empty or whitespace-only.
    #[error("query is empty")]
    EmptyQuery,

    /// No project is selected (project list not loaded or empty).
    #[error("no project selected")]
    NoProjectSelected,

    /// Another query is still awaiting its response.
    #[error("a query is already in flight")]
    QueryInFlight,

    /// The chat viewport has not received its first size yet.
    #[error("chat viewport is not ready")]
    ViewportNotReady,
}
