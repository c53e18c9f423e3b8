//! # Generic Actor Server
//!
//! `ResourceActor` owns one collection and processes its requests one at a
//! time. Because nothing else can touch the store, an `Action` that reads and
//! writes a record is atomic with respect to every other request.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Boxed id generator handed to the actor at construction time.
pub type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send>;

/// The generic actor that manages a collection of records.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(buffer, next_id)` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on the runtime.
///
/// # Operations
///
/// * **Create**: draws an id from the generator, builds the record with
///   `from_create_params`, runs `on_create`, stores it and returns the id.
///   Any hook error leaves the store unchanged.
/// * **Get**: clone of the record, or `None`.
/// * **List**: clones of every record, unordered.
/// * **Put**: stores the given record under the given id, replacing any
///   existing one. No hooks run.
/// * **Update**: `on_update` on the stored record, returns the new state.
///   Unknown ids fail with [`FrameworkError::NotFound`].
/// * **Action**: `handle_action` on the stored record. Unknown ids fail with
///   [`FrameworkError::NotFound`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; senders wait when it is full.
    /// * `next_id` - called once per create to mint the new record's id.
    ///   It must never return an id twice.
    pub fn new<F>(buffer_size: usize, next_id: F) -> (Self, ResourceClient<T>)
    where
        F: FnMut() -> T::Id + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();
                    let result = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => match item.on_create(&context).await {
                            Ok(()) => {
                                self.store.insert(id.clone(), item);
                                info!(entity_type, %id, size = self.store.len(), "Created");
                                Ok(id)
                            }
                            Err(e) => {
                                warn!(entity_type, error = %e, "on_create refused");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create refused");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Put {
                    id,
                    value,
                    respond_to,
                } => {
                    let replaced = self.store.insert(id.clone(), value).is_some();
                    info!(entity_type, %id, replaced, size = self.store.len(), "Put");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Update on missing record");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = match item.on_update(update, &context).await {
                        Ok(()) => {
                            info!(entity_type, %id, "Updated");
                            Ok(item.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update refused");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Action on missing record");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action refused"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
