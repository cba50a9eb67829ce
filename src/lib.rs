//! Transifex API client library.
//!
//! A Rust library for the Transifex v2 REST API, scoped to a single
//! project. Entity operations (Get, List, Create, Delete) are traits that
//! model types implement; translation content is exposed through free
//! functions.
//!
//! # Quick Start
//!
//! ```no_run
//! use transifex_api::{Get, Language, List, Resource, TransifexClient};
//!
//! #[tokio::main]
//! async fn main() -> transifex_api::Result<()> {
//!     // Create client from environment variables
//!     let mut client = TransifexClient::from_env()?;
//!
//!     // List the project's languages and resources
//!     let languages = Language::list(&client).await?;
//!     println!("Found {} languages", languages.len());
//!
//!     let resources = Resource::list(&client).await?;
//!     println!("Found {} resources", resources.len());
//!
//!     // Make a resource the default and download its French translation
//!     client.set_resource_name("app-strings");
//!     let resource = Resource::get(&client, None).await?;
//!     println!("Resource: {}", resource.name);
//!
//!     let po = transifex_api::get_resource_translation(&client, "fr", None, None).await?;
//!     println!("{po}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Get`] - Fetch a single entity ([`Project`], [`Resource`])
//! - [`List`] - Fetch a whole collection ([`Language`], [`Resource`])
//! - [`Create`] - Create an entity ([`Resource`])
//! - [`Delete`] - Remove an entity ([`Resource`])
//!
//! Resource operations take an optional slug. When it is `None` the
//! client's default resource (see [`TransifexClient::set_resource_name`])
//! is used.
//!
//! # Configuration
//!
//! [`TransifexClient::from_env`] reads:
//!
//! - `TRANSIFEX_PROJECT` (required) - Project slug
//! - `TRANSIFEX_USER` (required) - Username for basic auth
//! - `TRANSIFEX_PASSWORD` (required) - Password or API token
//! - `TRANSIFEX_RESOURCE` (optional) - Default resource slug
//! - `TRANSIFEX_API_URL` (optional) - API root (defaults to `https://www.transifex.com/api/2/`)

pub mod cli;
mod client;
mod config;
mod error;
mod models;
pub mod output;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{RequestOptions, TransifexClient};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{Result, TransifexError};

// Re-export traits
pub use traits::{Create, Delete, Get, List};

// Re-export models
pub use models::{
    ContentBody, ContentUpdate, Language, Project, Resource, ResourceContent, ResourceDescriptor,
    TranslationMode, TranslationString,
};

// Re-export convenience functions
pub use models::{
    get_project_languages, get_resource_content, get_resource_translation,
    get_translation_strings, update_resource_content,
};
