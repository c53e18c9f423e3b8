//! # Generic Messages
//!
//! The request type exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to a collection actor.
///
/// The variants mirror the operations of a document collection:
///
/// - **Create**: store a new record under a generated id.
/// - **Get**: fetch one record by id.
/// - **List**: fetch every record, in no particular order.
/// - **Put**: store a complete record under a caller-chosen id, replacing any
///   record already there.
/// - **Update**: apply a partial update to an existing record.
/// - **Action**: run a record-specific operation atomically.
///
/// Records are never removed, so there is no delete request.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Put {
        id: T::Id,
        value: T,
        respond_to: Response<()>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
