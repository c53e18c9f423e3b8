//! # Profile Client
//!
//! Reads and writes the `users` collection, keyed by identity id.
use crate::ledger::LedgerError;
use crate::model::{DocumentId, Profile};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProfileClient {
    inner: ResourceClient<Profile>,
}

impl ProfileClient {
    pub fn new(inner: ResourceClient<Profile>) -> Self {
        Self { inner }
    }

    /// Stores the profile under its own id, replacing any previous one.
    #[instrument(skip(self, profile), fields(uid = %profile.id))]
    pub async fn save(&self, profile: Profile) -> Result<(), LedgerError> {
        debug!("Sending request");
        self.inner
            .put(profile.id.clone(), profile)
            .await
            .map_err(Self::map_error)
    }

    /// Looks up the profile of an identity. `Ok(None)` when none was written yet.
    pub async fn find(&self, uid: &str) -> Result<Option<Profile>, LedgerError> {
        self.get(DocumentId::from(uid)).await
    }
}

impl ActorClient<Profile> for ProfileClient {
    type Error = LedgerError;

    fn inner(&self) -> &ResourceClient<Profile> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        LedgerError::from(e)
    }
}
