//! # ActorClient Trait
//!
//! Common read surface for collection-specific clients: `get` and `list` come
//! for free once a wrapper exposes its inner `ResourceClient` and an error
//! mapping.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Crop { id: u32 }
/// #[derive(Debug)] struct CropCreate;
/// #[derive(Debug)] struct CropUpdate;
/// #[derive(Debug)] enum CropAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("crop error: {0}")]
/// struct CropError(String);
///
/// #[async_trait]
/// impl ActorEntity for Crop {
///     type Id = u32;
///     type Create = CropCreate;
///     type Update = CropUpdate;
///     type Action = CropAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CropError;
///
///     fn from_create_params(id: u32, _: CropCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: CropUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, action: CropAction, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// struct CropClient {
///     inner: ResourceClient<Crop>,
/// }
///
/// impl ActorClient<Crop> for CropClient {
///     type Error = CropError;
///
///     fn inner(&self) -> &ResourceClient<Crop> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CropError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CropClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the collection-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record of the collection, unordered.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
