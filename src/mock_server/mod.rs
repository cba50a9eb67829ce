//! Mock Transifex API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! Transifex v2 project API for integration and end-to-end testing. Unlike
//! wiremock which mocks at the HTTP level per-test, this server maintains
//! state across requests, enabling realistic workflow testing (create a
//! resource, upload content, download it again).
//!
//! # Example
//!
//! ```ignore
//! use transifex_api::mock_server::MockServer;
//! use transifex_api::{Get, Project};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = server.client().unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = Project::get(&client, ()).await.unwrap();
//!     assert_eq!(project.name, "Demo Project");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{MockState, SharedState};
