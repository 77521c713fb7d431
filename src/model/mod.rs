//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod message;
pub mod project;
pub mod source;

// Re-export for convenience
pub use error::{AppError, InputValidationError, TransportError};
pub use key_action::KeyAction;
pub use message::{Message, MessagePair, Role, WrapCache};
pub use project::{InvalidProjectId, Project, ProjectId, QueryResponse};
pub use source::{InformationSource, RawSource, SourceKind};
