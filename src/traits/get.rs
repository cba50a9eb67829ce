//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::TransifexClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually.
/// Project-scoped entities use `()` as their ID; resources take an optional
/// slug that falls back to the client's default resource.
///
/// # Example
///
/// ```ignore
/// use transifex_api::{TransifexClient, Resource, Get};
///
/// let client = TransifexClient::from_env()?;
/// let resource = Resource::get(&client, Some("app-strings".to_string())).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &TransifexClient, id: Self::Id) -> Result<Self>;
}
