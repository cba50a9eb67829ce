//! E2E tests using the mock Transifex server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use transifex_api::mock_server::{Fixtures, MockServer, MockState};
use transifex_api::{
    get_project_languages, get_resource_content, get_resource_translation,
    get_translation_strings, update_resource_content, ClientConfig, ContentBody, Create, Delete,
    Get, List, Project, Resource, ResourceContent, ResourceDescriptor, TransifexClient,
    TransifexError, TranslationMode,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Project Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_project_and_languages() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let project = Project::get(&client, ()).await.expect("Failed to get project");
    assert_eq!(project.slug, "demo");
    assert_eq!(project.source_language_code.as_deref(), Some("en"));

    let codes = get_project_languages(&client)
        .await
        .expect("Failed to list languages");
    assert_eq!(codes, vec!["fr".to_string(), "de".to_string()]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_wrong_project_is_not_found() {
    let server = MockServer::start().await;
    let client = TransifexClient::new(
        ClientConfig::new("other", "api", "secret").with_api_url(server.api_url()),
    )
    .unwrap();

    let err = Project::get(&client, ()).await.unwrap_err();
    assert!(matches!(err, TransifexError::NotFound { .. }));

    server.shutdown().await;
}

// =============================================================================
// Resource Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_resource_lifecycle_workflow() {
    let server = MockServer::start().await;
    let mut client = server.client().unwrap();

    // Step 1: Create a resource with initial content
    let descriptor =
        ResourceDescriptor::new("web", "Web strings", "PO").with_content("msgid \"a\"\nmsgstr \"\"\n");
    Resource::create(&client, descriptor)
        .await
        .expect("Failed to create resource");

    let resources = Resource::list(&client).await.expect("Failed to list resources");
    assert_eq!(resources.len(), 2);

    // Step 2: Make it the default and upload new content
    client.set_resource_name("web");
    let data = ResourceContent {
        i18n_type: "PO".to_string(),
        name: "Web strings v2".to_string(),
        slug: "web".to_string(),
        content: ContentBody::Bytes {
            file_name: "web.po".to_string(),
            data: b"msgid \"a\"\nmsgstr \"\"\nmsgid \"b\"\nmsgstr \"\"\n".to_vec(),
        },
    };
    let update = update_resource_content(&client, data, None)
        .await
        .expect("Failed to upload content");
    assert_eq!(update.strings_added, 1);
    assert_eq!(update.strings_delete, 0);

    // Step 3: Verify the upload persisted
    let resource = Resource::get(&client, None).await.expect("Failed to get resource");
    assert_eq!(resource.name, "Web strings v2");

    let content = get_resource_content(&client, None)
        .await
        .expect("Failed to get content");
    assert!(content.contains("msgid \"b\""));

    // Step 4: Delete it
    Resource::delete(&client, None)
        .await
        .expect("Failed to delete resource");

    let err = Resource::get(&client, None).await.unwrap_err();
    assert!(matches!(err, TransifexError::NotFound { .. }));

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_duplicate_resource_fails() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let err = Resource::create(&client, ResourceDescriptor::new("app", "Again", "PO"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(400));

    server.shutdown().await;
}

// =============================================================================
// Translation Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_download_translation_and_strings() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let po = get_resource_translation(&client, "fr", Some("app"), None)
        .await
        .expect("Failed to get translation");
    assert!(po.contains("bonjour"));

    let strings = get_translation_strings(&client, Some("fr"), Some("app"))
        .await
        .expect("Failed to get strings");
    assert_eq!(strings.len(), 2);
    assert_eq!(strings[0]["translation"], "bonjour");

    server.shutdown().await;
}

#[tokio::test]
async fn test_missing_translation_uses_source_only_when_asked() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let err = get_resource_translation(&client, "de", Some("app"), None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    let po = get_resource_translation(
        &client,
        "de",
        Some("app"),
        Some(TranslationMode::SourceAsTranslation),
    )
    .await
    .expect("Failed to get source as translation");
    assert!(po.contains("msgid \"hello\""));

    server.shutdown().await;
}

// =============================================================================
// Auth Tests
// =============================================================================

#[tokio::test]
async fn test_credentials_are_checked() {
    let state = Fixtures::default_scenario().with_required_credentials("api", "secret");
    let server = MockServer::with_state(state).await;

    let good = server.client().unwrap();
    assert!(Resource::list(&good).await.is_ok());

    let bad = TransifexClient::new(
        ClientConfig::new("demo", "api", "nope").with_api_url(server.api_url()),
    )
    .unwrap();
    let err = Resource::list(&bad).await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));

    server.shutdown().await;
}

#[tokio::test]
async fn test_state_changes_are_visible() {
    let state = MockState::new().with_project(Fixtures::project("demo", "Demo"));
    let server = MockServer::with_state(state).await;
    let client = server.client().unwrap();

    assert!(Resource::list(&client).await.unwrap().is_empty());

    server
        .state()
        .write()
        .await
        .resources
        .insert("late".to_string(), Fixtures::resource("late", "Late", "PO"));

    let resources = Resource::list(&client).await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].slug, "late");

    server.shutdown().await;
}
