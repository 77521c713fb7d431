//! Data source boundary and asynchronous command execution.
//!
//! Slow work (listing projects, fetching sources, answering queries) goes
//! through a [`DataSource`]. The [`gateway`] runs each command as a tokio
//! task and reports back with a [`Completion`]; tasks never see UI state.

pub mod dummy;
pub mod gateway;

use crate::model::{Project, ProjectId, QueryResponse, RawSource, TransportError};
use async_trait::async_trait;

pub use dummy::DummyDataSource;
pub use gateway::{run_command, CommandGateway};

/// Where projects, sources and answers come from.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// All projects visible to the user, in display order.
    async fn fetch_projects(&self) -> Result<Vec<Project>, TransportError>;

    /// Information sources configured for `project_id`, in display order.
    async fn fetch_sources(&self, project_id: &ProjectId) -> Result<Vec<RawSource>, TransportError>;

    /// Ask a question about `project_id`.
    async fn submit_query(
        &self,
        project_id: &ProjectId,
        text: &str,
    ) -> Result<QueryResponse, TransportError>;
}

/// Result of a finished command, delivered back to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Project list loaded.
    Projects(Result<Vec<Project>, TransportError>),
    /// Sources loaded for one project.
    Sources {
        /// Project the fetch was for.
        project_id: ProjectId,
        /// Generation the fetch was issued with.
        generation: u64,
        /// Raw source records or the failure.
        result: Result<Vec<RawSource>, TransportError>,
    },
    /// Query answered.
    Answer {
        /// Project the query was about.
        project_id: ProjectId,
        /// The answer or the failure.
        result: Result<QueryResponse, TransportError>,
    },
}
