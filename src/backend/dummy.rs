//! In-process data source with canned projects, sources and answers.

use super::DataSource;
use crate::model::{Project, ProjectId, QueryResponse, RawSource, TransportError};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use std::time::Duration;

/// Default simulated latency of a query.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

const ARCHITECTURE_ANSWER: &str = "The system follows a microservices architecture with the following components:

1. API Gateway: Handles routing and authentication
2. Service Layer: Domain-specific services (auth, products, orders)
3. Data Layer: PostgreSQL for transactional data, Redis for caching
4. Message Queue: RabbitMQ for async processing

All services communicate via REST APIs and publish events to the message queue for cross-service coordination.";

const AUTHENTICATION_ANSWER: &str = "Authentication is handled using JWT tokens with the following flow:

1. User submits credentials to /auth/login
2. Backend validates against user database
3. On success, generates JWT with 1-hour expiration
4. Frontend stores token and includes in Authorization header
5. API Gateway validates token on each request
6. Refresh tokens are used for extended sessions

The system also supports OAuth2 for third-party authentication via Google and GitHub.";

const DATABASE_ANSWER: &str = "The database schema consists of several key tables:

- users: User accounts and profiles
- projects: Project metadata and ownership
- documents: Indexed documents and their embeddings
- queries: Query history and analytics
- sources: Information source configurations

All tables use UUID primary keys and include created_at/updated_at timestamps. Indexes are optimized for common query patterns.";

const TESTING_ANSWER: &str = "The testing strategy includes:

1. Unit Tests: business logic coverage above 80%
2. Integration Tests: API endpoint testing with test database
3. E2E Tests: Playwright for critical user flows
4. Load Tests: k6 for performance validation

CI/CD pipeline runs all tests on PRs. E2E tests run on staging deployments.";

/// Keyword answers, checked in order.
const KEYWORD_ANSWERS: [(&str, &str); 4] = [
    ("architecture", ARCHITECTURE_ANSWER),
    ("authentication", AUTHENTICATION_ANSWER),
    ("database", DATABASE_ANSWER),
    ("testing", TESTING_ANSWER),
];

/// Stub data source serving fixed data after a simulated delay.
#[derive(Debug, Clone)]
pub struct DummyDataSource {
    latency: Duration,
}

impl Default for DummyDataSource {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl DummyDataSource {
    /// Create a data source that answers queries after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

/// Canned answer for `query`, matched case-insensitively by keyword.
pub fn canned_answer(query: &str) -> String {
    let lowered = query.to_lowercase();
    KEYWORD_ANSWERS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, answer)| (*answer).to_string())
        .unwrap_or_else(|| {
            format!(
                "Based on my analysis of the codebase, here's what I found regarding your query:

\"{query}\"

The system implements this feature across multiple modules with proper separation of concerns. The main implementation can be found in the service layer, with supporting infrastructure in the data access layer.

Key components:
- Service orchestration in the application layer
- Data persistence via repository pattern
- Event-driven updates for real-time synchronization
- Caching for performance optimization

Would you like more specific details about any particular aspect?"
            )
        })
}

fn project(id: &str, name: &str, description: &str, age_days: i64) -> Result<Project, TransportError> {
    let id = ProjectId::new(id).map_err(|e| TransportError::Decode(e.to_string()))?;
    Ok(Project {
        id,
        name: name.to_string(),
        description: description.to_string(),
        created_at: Utc::now() - ChronoDuration::days(age_days),
    })
}

fn github(name: &str, repo: &str) -> RawSource {
    let url = format!("https://github.com/{repo}");
    RawSource::new(name, "github", [("repo", repo), ("url", url.as_str())])
}

#[async_trait]
impl DataSource for DummyDataSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, TransportError> {
        Ok(vec![
            project(
                "proj-1",
                "Cortex Knowledge System",
                "AI-powered knowledge management for software projects",
                30,
            )?,
            project(
                "proj-2",
                "E-Commerce Platform",
                "Microservices-based online shopping platform",
                60,
            )?,
            project(
                "proj-3",
                "Mobile Banking App",
                "iOS and Android banking application",
                90,
            )?,
        ])
    }

    async fn fetch_sources(&self, project_id: &ProjectId) -> Result<Vec<RawSource>, TransportError> {
        let sources = match project_id.as_str() {
            "proj-1" => vec![
                github("cortex-main", "730alchemy/cortex"),
                RawSource::new(
                    "Project Documentation",
                    "notion",
                    [("workspace", "Cortex Team"), ("workspace_id", "ws-12345")],
                ),
                RawSource::new(
                    "Feature Tracker",
                    "linear",
                    [("team", "Engineering"), ("project", "Cortex")],
                ),
            ],
            "proj-2" => vec![
                github("ecommerce-backend", "company/ecommerce-api"),
                RawSource::new(
                    "Architecture Docs",
                    "googledocs",
                    [("folder", "E-Commerce Architecture"), ("doc_id", "doc-67890")],
                ),
            ],
            "proj-3" => vec![
                github("banking-ios", "fintech/banking-ios"),
                github("banking-android", "fintech/banking-android"),
                RawSource::new(
                    "Product Requirements",
                    "notion",
                    [("workspace", "Product Team"), ("workspace_id", "ws-54321")],
                ),
            ],
            _ => Vec::new(),
        };
        Ok(sources)
    }

    async fn submit_query(
        &self,
        project_id: &ProjectId,
        text: &str,
    ) -> Result<QueryResponse, TransportError> {
        tracing::debug!(%project_id, latency_ms = self.latency.as_millis() as u64, "Answering query");
        tokio::time::sleep(self.latency).await;
        Ok(QueryResponse {
            response_text: canned_answer(text),
            timestamp: Utc::now(),
        })
    }
}
