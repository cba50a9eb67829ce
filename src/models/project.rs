//! Project model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TransifexClient;
use crate::error::Result;
use crate::traits::Get;

/// A Transifex project.
///
/// The client is scoped to exactly one project, so the project is fetched
/// with `()` as its ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// The project slug.
    pub slug: String,

    /// Human-readable project name.
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,

    /// Language code of the source strings (e.g. "en").
    #[serde(default)]
    pub source_language_code: Option<String>,

    /// Project homepage.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Whether the project is private.
    #[serde(default)]
    pub private: bool,

    /// Any other fields returned by the API.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[async_trait]
impl Get for Project {
    type Id = ();

    #[tracing::instrument(skip(client))]
    async fn get(client: &TransifexClient, _id: ()) -> Result<Self> {
        client
            .get_json("")
            .await
            .map_err(|e| e.or_not_found("Project", client.project_name()))
    }
}
