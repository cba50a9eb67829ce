//! Create trait for adding new entities.

use async_trait::async_trait;

use crate::client::TransifexClient;
use crate::error::Result;

/// Create a new entity.
///
/// # Example
///
/// ```ignore
/// use transifex_api::{TransifexClient, Resource, ResourceDescriptor, Create};
///
/// let client = TransifexClient::from_env()?;
/// let created = Resource::create(
///     &client,
///     ResourceDescriptor::new("app", "App strings", "PO"),
/// ).await?;
/// ```
#[async_trait]
pub trait Create {
    /// Description of the entity to create.
    type Params: Send;

    /// What the API returns for a successful creation.
    type Output;

    /// Create the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    async fn create(client: &TransifexClient, params: Self::Params) -> Result<Self::Output>;
}
