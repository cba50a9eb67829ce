//! Project language model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TransifexClient;
use crate::error::Result;
use crate::traits::List;

/// A target language of the project, with its team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Locale code, e.g. `en_US`.
    pub language_code: String,

    #[serde(default)]
    pub coordinators: Vec<String>,

    #[serde(default)]
    pub reviewers: Vec<String>,

    #[serde(default)]
    pub translators: Vec<String>,
}

#[async_trait]
impl List for Language {
    #[tracing::instrument(skip(client))]
    async fn list(client: &TransifexClient) -> Result<Vec<Self>> {
        client.get_json("languages/").await
    }
}

/// Fetch the language codes the project is translated into.
///
/// # Example
///
/// ```ignore
/// let codes = transifex_api::get_project_languages(&client).await?;
/// assert!(codes.contains(&"fr".to_string()));
/// ```
pub async fn get_project_languages(client: &TransifexClient) -> Result<Vec<String>> {
    let languages = Language::list(client).await?;
    Ok(languages.into_iter().map(|l| l.language_code).collect())
}
