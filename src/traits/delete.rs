//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::TransifexClient;
use crate::error::Result;

/// Delete an existing entity.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id: Send;

    /// The result returned by the API for a deletion.
    type Output;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &TransifexClient, id: Self::Id) -> Result<Self::Output>;
}
