//! Mock Transifex API server.
//!
//! Provides an axum-based HTTP server that simulates the Transifex v2 API.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use base64::Engine;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{Fixtures, DEFAULT_PROJECT};
use super::handlers::{self, error_response};
use super::state::{MockState, SharedState};
use crate::{ClientConfig, TransifexClient};

/// A mock Transifex API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: SharedState,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `api_url()` to get the API root to configure a client with.
    pub async fn start() -> Self {
        Self::with_state(Fixtures::default_scenario()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the API root, suitable for [`ClientConfig::with_api_url`].
    pub fn api_url(&self) -> String {
        format!("{}/api/2/", self.url)
    }

    /// Build a client for the default fixture project.
    ///
    /// Uses the credentials `api` / `secret`.
    pub fn client(&self) -> crate::Result<TransifexClient> {
        TransifexClient::new(
            ClientConfig::new(DEFAULT_PROJECT, "api", "secret").with_api_url(self.api_url()),
        )
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the axum router with all routes.
    fn create_router(state: SharedState) -> Router {
        Router::new()
            // Project routes
            .route("/api/2/project/:project/", get(handlers::get_project))
            .route(
                "/api/2/project/:project/languages/",
                get(handlers::list_languages),
            )
            // Resource routes
            .route(
                "/api/2/project/:project/resources",
                get(handlers::list_resources).post(handlers::create_resource),
            )
            .route(
                "/api/2/project/:project/resource/:slug",
                get(handlers::get_resource).delete(handlers::delete_resource),
            )
            // Content and translation routes
            .route(
                "/api/2/project/:project/resource/:slug/content",
                get(handlers::get_content).put(handlers::update_content),
            )
            .route(
                "/api/2/project/:project/resource/:slug/translation/:lang/",
                get(handlers::get_translation),
            )
            .route(
                "/api/2/project/:project/resource/:slug/translation/:lang/strings",
                get(handlers::get_strings),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Reject requests without the configured basic-auth credentials.
async fn require_auth(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let required = state.read().await.required_credentials.clone();

    if let Some((user, password)) = required {
        let expected = format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"))
        );
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if provided != Some(expected.as_str()) {
            return error_response(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Authorization required".to_string(),
            );
        }
    }

    next.run(request).await
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Get, List, Project, Resource};

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        // Server should be accessible
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_project_with_client() {
        let server = MockServer::start().await;
        let client = server.client().unwrap();

        let project = Project::get(&client, ())
            .await
            .expect("Failed to get project");

        assert_eq!(project.name, "Demo Project");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_list_resources_with_client() {
        let server = MockServer::start().await;
        let client = server.client().unwrap();

        let resources = Resource::list(&client)
            .await
            .expect("Failed to list resources");

        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].slug, "app");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = server.client().unwrap();

        let result = Project::get(&client, ()).await;

        assert!(matches!(
            result,
            Err(crate::TransifexError::NotFound { .. })
        ));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_required_credentials() {
        let state = Fixtures::default_scenario().with_required_credentials("api", "secret");
        let server = MockServer::with_state(state).await;

        let client = server.client().unwrap();
        assert!(Project::get(&client, ()).await.is_ok());

        let wrong = TransifexClient::new(
            ClientConfig::new(DEFAULT_PROJECT, "api", "wrong").with_api_url(server.api_url()),
        )
        .unwrap();
        let err = Project::get(&wrong, ()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(401));

        server.shutdown().await;
    }
}
