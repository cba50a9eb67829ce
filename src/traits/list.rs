//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::TransifexClient;
use crate::error::Result;

/// List every entity of a kind within the client's project.
///
/// The Transifex v2 project endpoints return whole collections, so there
/// is no paging.
///
/// # Example
///
/// ```ignore
/// use transifex_api::{TransifexClient, Language, List};
///
/// let client = TransifexClient::from_env()?;
/// let languages = Language::list(&client).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// List all entities in the project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not valid JSON.
    async fn list(client: &TransifexClient) -> Result<Vec<Self>>;
}
