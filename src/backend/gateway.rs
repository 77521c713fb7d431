//! Runs commands as tokio tasks and reports completions over a channel.

use super::{Completion, DataSource};
use crate::model::TransportError;
use crate::state::Command;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Longest a single data source call may take.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Execute `command` against `source`.
///
/// Pure with respect to application state: the outcome is only returned.
pub async fn run_command(source: &dyn DataSource, command: Command) -> Completion {
    run_command_with_timeout(source, command, REQUEST_TIMEOUT).await
}

async fn run_command_with_timeout(
    source: &dyn DataSource,
    command: Command,
    limit: Duration,
) -> Completion {
    match command {
        Command::FetchProjects => {
            Completion::Projects(with_timeout("fetch_projects", limit, source.fetch_projects()).await)
        }
        Command::FetchSources {
            project_id,
            generation,
        } => {
            let result =
                with_timeout("fetch_sources", limit, source.fetch_sources(&project_id)).await;
            Completion::Sources {
                project_id,
                generation,
                result,
            }
        }
        Command::SubmitQuery { project_id, text } => {
            let result =
                with_timeout("submit_query", limit, source.submit_query(&project_id, &text)).await;
            Completion::Answer { project_id, result }
        }
    }
}

async fn with_timeout<T>(
    endpoint: &str,
    limit: Duration,
    call: impl Future<Output = Result<T, TransportError>>,
) -> Result<T, TransportError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::Timeout {
            endpoint: endpoint.to_string(),
            millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

/// Spawns one task per command on a tokio runtime.
///
/// Completions arrive on the receiver returned by [`CommandGateway::new`]
/// in the order tasks finish.
#[derive(Clone)]
pub struct CommandGateway {
    runtime: Handle,
    source: Arc<dyn DataSource>,
    completions: UnboundedSender<Completion>,
}

impl CommandGateway {
    /// Create a gateway and the receiving end of its completion channel.
    pub fn new(runtime: Handle, source: Arc<dyn DataSource>) -> (Self, UnboundedReceiver<Completion>) {
        let (completions, rx) = mpsc::unbounded_channel();
        (
            Self {
                runtime,
                source,
                completions,
            },
            rx,
        )
    }

    /// Start `command` in the background.
    pub fn issue(&self, command: Command) {
        tracing::debug!(?command, "Issuing command");
        let source = Arc::clone(&self.source);
        let completions = self.completions.clone();
        self.runtime.spawn(async move {
            let completion = run_command(source.as_ref(), command).await;
            if completions.send(completion).is_err() {
                tracing::debug!("Completion dropped, receiver closed");
            }
        });
    }

    /// Start every command in `commands`.
    pub fn issue_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.issue(command);
        }
    }
}

impl std::fmt::Debug for CommandGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandGateway").finish_non_exhaustive()
    }
}
