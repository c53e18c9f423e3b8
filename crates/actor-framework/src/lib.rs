//! # Actor Framework
//!
//! Building blocks for collection-oriented actor systems. Every collection of
//! records (a "document collection") is owned by exactly one [`ResourceActor`]
//! task; everything else talks to it through a cloneable [`ResourceClient`].
//!
//! ## Why one actor per collection?
//!
//! - The actor owns its `HashMap` store outright, so no locks are needed.
//! - Requests are applied **sequentially**, which makes the actor loop the
//!   consistency boundary of the collection: a compare-and-swap expressed as
//!   an [`ActorEntity::Action`] can never interleave with another write.
//! - Collections are independent; a slow collection never blocks another.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - record shape, validation, mutations
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     text: String,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: Option<String> }
//! #[derive(Debug)] enum NoteAction {}
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Action = NoteAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(text) = update.text { self.text = text; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut next = 0u32;
//!     let (actor, client) = ResourceActor::<Note>::new(10, move || { next += 1; next });
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     let all = client.list().await.unwrap();
//!     assert_eq!(all.len(), 1);
//!     assert_eq!(all[0].id, id);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`] rather than `new`, so
//! actors that need each other's clients can all be constructed first and
//! wired afterwards.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`] (fluent expectations) and
//! [`mock::create_mock_client`] (raw request inspection) for exercising client
//! wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
