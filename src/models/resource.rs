//! Resource model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{segment, TransifexClient};
use crate::error::Result;
use crate::traits::{Create, Delete, Get, List};

/// A resource: one source file of translatable strings in the project.
///
/// The list endpoint returns summaries and the single-resource endpoint
/// returns details; both fit this struct, with any extra fields kept in
/// `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// The resource slug.
    pub slug: String,

    /// Human-readable resource name.
    pub name: String,

    /// File format handler, e.g. "PO" or "KEYVALUEJSON".
    #[serde(default)]
    pub i18n_type: Option<String>,

    /// Language code of the source strings.
    #[serde(default)]
    pub source_language_code: Option<String>,

    #[serde(default)]
    pub categories: Option<Vec<String>>,

    #[serde(default)]
    pub priority: Option<String>,

    /// Any other fields returned by the API.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Description of a resource to create.
///
/// Serialized as-is into the JSON body of `POST /resources`; unset optional
/// fields are left out.
///
/// # Example
///
/// ```
/// use transifex_api::ResourceDescriptor;
///
/// let descriptor = ResourceDescriptor::new("app", "App strings", "PO")
///     .with_content("msgid \"hello\"\nmsgstr \"\"\n");
/// assert_eq!(descriptor.slug, "app");
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub slug: String,
    pub name: String,
    pub i18n_type: String,
    /// Initial source file content.
    pub content: Option<String>,
    pub categories: Option<Vec<String>>,
    pub priority: Option<String>,
    pub accept_translations: Option<bool>,
}

impl ResourceDescriptor {
    /// Create a descriptor with the required fields.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        i18n_type: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            i18n_type: i18n_type.into(),
            ..Default::default()
        }
    }

    /// Attach initial source content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[async_trait]
impl Get for Resource {
    /// Resource slug; `None` uses the client's default resource.
    type Id = Option<String>;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TransifexClient, slug: Option<String>) -> Result<Self> {
        let slug = client.resolve_resource(slug.as_deref())?;
        let path = format!("resource/{}", segment(&slug));

        client
            .get_json(&path)
            .await
            .map_err(|e| e.or_not_found("Resource", &slug))
    }
}

#[async_trait]
impl List for Resource {
    #[tracing::instrument(skip(client))]
    async fn list(client: &TransifexClient) -> Result<Vec<Self>> {
        client.get_json("resources").await
    }
}

#[async_trait]
impl Create for Resource {
    type Params = ResourceDescriptor;

    /// The creation response is passed through untouched.
    type Output = serde_json::Value;

    #[tracing::instrument(skip(client, params), fields(slug = %params.slug))]
    async fn create(client: &TransifexClient, params: ResourceDescriptor) -> Result<Self::Output> {
        let response = client.post_json("resources", &params).await?;
        TransifexClient::json_or_null(response).await
    }
}

#[async_trait]
impl Delete for Resource {
    /// Resource slug; `None` uses the client's default resource.
    type Id = Option<String>;

    /// The deletion response, `Value::Null` for an empty body.
    type Output = serde_json::Value;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &TransifexClient, slug: Option<String>) -> Result<Self::Output> {
        let slug = client.resolve_resource(slug.as_deref())?;
        let path = format!("resource/{}", segment(&slug));

        let response = client
            .delete(&path)
            .await
            .map_err(|e| e.or_not_found("Resource", &slug))?;
        TransifexClient::json_or_null(response).await
    }
}
