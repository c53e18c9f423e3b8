//! # Trade Ledger
//!
//! Storage side of the shared collections. Each collection is a
//! [`ResourceActor`] over one record type; this module supplies the record
//! behaviour those actors run:
//!
//! - [`entity`] - `ActorEntity` for every record, with create/update validation
//! - [`actions`] - the compare-and-swap [`QuantityAction`] behind "sell"
//! - [`collection`] - collection names and which roles may write them
//! - [`error`] - [`LedgerError`]
//!
//! Access control and the retrying decrement live one layer up, in
//! [`LedgerClient`](crate::clients::LedgerClient).
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use supply_chain::clients::LedgerClient;
//! use supply_chain::ledger;
//! use supply_chain::model::{InventoryCreate, InventoryItem, Role};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, inner) = ledger::new::<InventoryItem>(32);
//!     tokio::spawn(actor.run(()));
//!     let inventory = LedgerClient::new(inner, 3);
//!
//!     let id = inventory
//!         .create(Role::Farmer, InventoryCreate::new("Wheat", 50, 12.5))
//!         .await?;
//!     let items = inventory.list().await?;
//!     assert!(items.iter().any(|item| item.id == id));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod collection;
pub mod entity;
pub mod error;
mod validation;

pub use actions::*;
pub use collection::*;
pub use entity::*;
pub use error::*;

use crate::model::id_sequence;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the actor for one collection and its client.
///
/// Ids are `<collection name>_<n>`, unique within the actor's lifetime.
pub fn new<T: LedgerRecord>(buffer_size: usize) -> (ResourceActor<T>, ResourceClient<T>) {
    ResourceActor::new(buffer_size, id_sequence(T::COLLECTION.name()))
}
