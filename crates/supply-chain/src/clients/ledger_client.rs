//! # Ledger Client
//!
//! Capability-checked access to one collection. Reads (`get`, `list`) come
//! from [`ActorClient`]; every write names the acting [`Role`] and is refused
//! before it is sent when that role does not own the collection.
use crate::ledger::{LedgerError, LedgerRecord, QuantityAction, Stocked};
use crate::model::{DocumentId, Role};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

pub struct LedgerClient<T: LedgerRecord> {
    inner: ResourceClient<T>,
    cas_attempts: u32,
}

impl<T: LedgerRecord> Clone for LedgerClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cas_attempts: self.cas_attempts,
        }
    }
}

impl<T: LedgerRecord> ActorClient<T> for LedgerClient<T> {
    type Error = LedgerError;

    fn inner(&self) -> &ResourceClient<T> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        LedgerError::from(e)
    }
}

impl<T: LedgerRecord> LedgerClient<T> {
    /// `cas_attempts` bounds how often a conditional write is retried after
    /// losing a race; zero is treated as one.
    pub fn new(inner: ResourceClient<T>, cas_attempts: u32) -> Self {
        Self {
            inner,
            cas_attempts: cas_attempts.max(1),
        }
    }

    fn authorize(&self, role: Role) -> Result<(), LedgerError> {
        if T::COLLECTION.permits_write(role) {
            return Ok(());
        }
        warn!(%role, collection = %T::COLLECTION, "Write refused for role");
        Err(LedgerError::Forbidden {
            role,
            collection: T::COLLECTION,
        })
    }

    /// Stores a new record and returns its id. The caller appends the record
    /// to its own cache; nothing is pushed to other readers.
    #[instrument(skip(self), fields(collection = %T::COLLECTION))]
    pub async fn create(&self, role: Role, params: T::Create) -> Result<DocumentId, LedgerError> {
        self.authorize(role)?;
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Overwrites exactly the fields set in `update`. Last write wins.
    ///
    /// Fails with [`LedgerError::NotFound`] when `id` does not exist.
    #[instrument(skip(self), fields(collection = %T::COLLECTION))]
    pub async fn update(
        &self,
        role: Role,
        id: DocumentId,
        update: T::Update,
    ) -> Result<T, LedgerError> {
        self.authorize(role)?;
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

impl<T: Stocked> LedgerClient<T> {
    /// Draws `amount` from the record's quantity and returns what is left.
    ///
    /// Reads the current quantity, refuses with
    /// [`LedgerError::InsufficientQuantity`] if the result would go below
    /// zero, and otherwise writes conditionally on the value read. A lost
    /// race re-reads and tries again, up to the configured attempts.
    #[instrument(skip(self), fields(collection = %T::COLLECTION))]
    pub async fn decrement_quantity(
        &self,
        role: Role,
        id: DocumentId,
        amount: u32,
    ) -> Result<u32, LedgerError> {
        self.authorize(role)?;

        for attempt in 1..=self.cas_attempts {
            let current = self
                .get(id.clone())
                .await?
                .ok_or_else(|| LedgerError::NotFound(id.clone()))?;
            let available = current.quantity();

            if amount > available {
                warn!(%id, amount, available, "Not enough quantity available");
                return Err(LedgerError::InsufficientQuantity {
                    requested: amount,
                    available,
                });
            }

            let action = QuantityAction::Decrement {
                expected: available,
                amount,
            };
            match self
                .inner
                .perform_action(id.clone(), action)
                .await
                .map_err(Self::map_error)
            {
                Err(LedgerError::Conflict(_)) => {
                    debug!(%id, attempt, "Quantity changed since read, retrying");
                }
                result => return result,
            }
        }

        warn!(%id, attempts = self.cas_attempts, "Giving up after repeated conflicts");
        Err(LedgerError::Conflict(id))
    }
}
