//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored in a [`ResourceActor`](crate::ResourceActor).
//! Associated types pin down the id, the creation and update payloads, the
//! custom actions and the error type, so a payload meant for one collection
//! can never be sent to another.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] defaults to `Ok(())`. Override it when creation
//! needs to consult the injected context.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they may call other actors through the `Context`
/// injected at `run()` time.
///
/// # Errors
/// One error type per entity. Hooks that refuse a request return it, the
/// actor leaves its store untouched and hands the error back boxed inside
/// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The key the record is stored under. Generated by the actor's id
    /// function on create, or supplied by the caller on put.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// A partial update. Fields left unset must be left untouched.
    type Update: Send + Sync + Debug;

    /// Record-specific operations that must run atomically inside the actor.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from its freshly assigned id and the payload.
    /// Returning an error refuses the write: nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after `from_create_params` succeeded and before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update in place.
    ///
    /// Implementations must validate before mutating: on `Err` the actor
    /// keeps the (possibly modified) record, so a half-applied update would
    /// be visible to the next reader.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
