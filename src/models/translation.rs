//! Translation content, translation strings and source uploads.

use std::fmt;
use std::str::FromStr;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::client::{is_dot_segment, segment, TransifexClient};
use crate::error::{Result, TransifexError};

/// A translation string record.
///
/// Passed through as returned by the API; the client does not model its
/// shape.
pub type TranslationString = serde_json::Value;

/// Which strings the translation download should contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Translated strings, falling back to the source.
    #[default]
    Default,
    /// Reviewed strings only.
    Reviewed,
    /// Suitable for offline translation.
    Translator,
    /// Translated strings only, untranslated left empty.
    OnlyTranslated,
    /// Reviewed strings only, the rest left empty.
    OnlyReviewed,
    /// Proofread strings only, the rest left empty.
    OnlyProofread,
    /// Source strings in place of untranslated ones.
    SourceAsTranslation,
}

impl TranslationMode {
    /// The value sent in the `mode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Reviewed => "reviewed",
            Self::Translator => "translator",
            Self::OnlyTranslated => "onlytranslated",
            Self::OnlyReviewed => "onlyreviewed",
            Self::OnlyProofread => "onlyproofread",
            Self::SourceAsTranslation => "sourceastranslation",
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationMode {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "reviewed" => Ok(Self::Reviewed),
            "translator" => Ok(Self::Translator),
            "onlytranslated" => Ok(Self::OnlyTranslated),
            "onlyreviewed" => Ok(Self::OnlyReviewed),
            "onlyproofread" => Ok(Self::OnlyProofread),
            "sourceastranslation" => Ok(Self::SourceAsTranslation),
            other => Err(format!("unknown translation mode '{other}'")),
        }
    }
}

/// Body of a resource content upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBody {
    /// Content given inline as a string.
    Text(String),
    /// Content read from a file, sent as a file part.
    Bytes { file_name: String, data: Vec<u8> },
}

/// New source content for a resource.
#[derive(Debug, Clone)]
pub struct ResourceContent {
    /// File format handler, e.g. "PO".
    pub i18n_type: String,
    pub name: String,
    pub slug: String,
    pub content: ContentBody,
}

impl ResourceContent {
    /// Check that `type`, `name` and `slug` are all present.
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("type", &self.i18n_type),
            ("name", &self.name),
            ("slug", &self.slug),
        ] {
            if value.is_empty() {
                return Err(TransifexError::MissingField(field));
            }
        }
        Ok(())
    }

    fn into_form(self) -> Form {
        let content = match self.content {
            ContentBody::Text(text) => Part::text(text),
            ContentBody::Bytes { file_name, data } => Part::bytes(data).file_name(file_name),
        };

        Form::new()
            .text("type", self.i18n_type)
            .text("name", self.name)
            .text("slug", self.slug)
            .part("content", content)
    }
}

/// Result of a content upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentUpdate {
    #[serde(default)]
    pub strings_added: u64,
    #[serde(default)]
    pub strings_updated: u64,
    #[serde(default)]
    pub strings_delete: u64,
    #[serde(default)]
    pub redirect: Option<String>,
    /// Any other fields returned by the API.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: String,
}

#[derive(Debug, Serialize)]
struct TranslationQuery {
    mode: TranslationMode,
}

fn require_language(lang_code: Option<&str>) -> Result<&str> {
    match lang_code {
        Some(code) if !code.is_empty() && !is_dot_segment(code) => Ok(code),
        other => Err(TransifexError::InvalidLanguageCode(
            other.unwrap_or_default().to_string(),
        )),
    }
}

/// Download the translation of a resource as file content.
///
/// Returns the `content` field of the API response, e.g. the text of a
/// `.po` file. `resource` falls back to the client's default resource and
/// `mode` to [`TranslationMode::Default`].
///
/// # Errors
///
/// Returns [`TransifexError::InvalidLanguageCode`] for an empty, `.` or `..`
/// language code without sending a request.
///
/// # Example
///
/// ```ignore
/// let po = get_resource_translation(&client, "fr", Some("app"), None).await?;
/// ```
#[tracing::instrument(skip(client))]
pub async fn get_resource_translation(
    client: &TransifexClient,
    lang_code: &str,
    resource: Option<&str>,
    mode: Option<TranslationMode>,
) -> Result<String> {
    let lang_code = require_language(Some(lang_code))?;
    let slug = client.resolve_resource(resource)?;
    let path = format!(
        "resource/{}/translation/{}/",
        segment(&slug),
        segment(lang_code)
    );

    let query = TranslationQuery {
        mode: mode.unwrap_or_default(),
    };
    let response: ContentResponse = client.get_json_with_query(&path, &query).await?;
    Ok(response.content)
}

/// Fetch the translation strings of a resource in one language.
///
/// # Errors
///
/// Returns [`TransifexError::InvalidLanguageCode`] when `lang_code` is
/// missing, empty, `.` or `..`, without sending a request.
#[tracing::instrument(skip(client))]
pub async fn get_translation_strings(
    client: &TransifexClient,
    lang_code: Option<&str>,
    resource: Option<&str>,
) -> Result<Vec<TranslationString>> {
    let lang_code = require_language(lang_code)?;
    let slug = client.resolve_resource(resource)?;
    let path = format!(
        "resource/{}/translation/{}/strings",
        segment(&slug),
        segment(lang_code)
    );

    client.get_json(&path).await
}

/// Download the source content of a resource.
#[tracing::instrument(skip(client))]
pub async fn get_resource_content(
    client: &TransifexClient,
    resource: Option<&str>,
) -> Result<String> {
    let slug = client.resolve_resource(resource)?;
    let path = format!("resource/{}/content", segment(&slug));

    let response: ContentResponse = client.get_json(&path).await?;
    Ok(response.content)
}

/// Replace the source content of a resource.
///
/// The target slug is the explicit `resource`, else the client's default
/// resource, else `data.slug`. The body is sent as a multipart form with
/// `type`, `name`, `slug` and `content` parts.
///
/// # Errors
///
/// Returns [`TransifexError::MissingField`] when `i18n_type`, `name` or
/// `slug` is empty, without sending a request.
#[tracing::instrument(skip(client, data), fields(slug = %data.slug))]
pub async fn update_resource_content(
    client: &TransifexClient,
    data: ResourceContent,
    resource: Option<&str>,
) -> Result<ContentUpdate> {
    data.validate()?;
    let slug = client.resolve_resource_or(resource, Some(&data.slug))?;
    let path = format!("resource/{}/content", segment(&slug));

    let response = client.put_form(&path, data.into_form()).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
