use crate::auth::{CredentialProvider, LocalCredentialProvider};
use crate::clients::{Ledger, LedgerClient, ProfileClient};
use crate::config::Config;
use crate::forms::AuthForms;
use crate::ledger::{self, LedgerRecord};
use crate::model::Profile;
use crate::session::SessionStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// The running application: every collection actor, the credential
/// provider, and the session store that follows it.
///
/// # Example
///
/// ```rust
/// use supply_chain::config::Config;
/// use supply_chain::lifecycle::SupplyChainSystem;
///
/// #[tokio::main]
/// async fn main() {
///     let system = SupplyChainSystem::start(&Config::default());
///     let session = system.session.resolved().await;
///     assert!(!session.is_authenticated());
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct SupplyChainSystem {
    pub ledger: Ledger,
    pub profiles: ProfileClient,
    pub provider: Arc<LocalCredentialProvider>,
    pub session: Arc<SessionStore>,
    handles: Vec<JoinHandle<()>>,
}

impl SupplyChainSystem {
    /// Spawns all actors. Must be called inside a Tokio runtime.
    pub fn start(config: &Config) -> Self {
        let mut handles = Vec::new();

        let (profile_actor, profile_inner) = ledger::new::<Profile>(config.channel_capacity);
        handles.push(tokio::spawn(profile_actor.run(())));
        let profiles = ProfileClient::new(profile_inner);

        let ledger = Ledger {
            inventory: spawn_collection(config, &mut handles),
            crops_for_sale: spawn_collection(config, &mut handles),
            crops: spawn_collection(config, &mut handles),
            trader_prices: spawn_collection(config, &mut handles),
            crop_offers: spawn_collection(config, &mut handles),
            product_listings: spawn_collection(config, &mut handles),
            distributor_products: spawn_collection(config, &mut handles),
            shop_products: spawn_collection(config, &mut handles),
            orders: spawn_collection(config, &mut handles),
        };

        let provider = Arc::new(LocalCredentialProvider::new(config.min_password_len));
        let dyn_provider: Arc<dyn CredentialProvider> = provider.clone();
        let session = Arc::new(SessionStore::start(dyn_provider, profiles.clone()));

        info!(collections = handles.len(), "System started");
        Self {
            ledger,
            profiles,
            provider,
            session,
            handles,
        }
    }

    pub fn forms(&self) -> AuthForms {
        AuthForms::new(
            self.provider.clone(),
            self.profiles.clone(),
            self.session.clone(),
        )
    }

    /// Stops the session store, then closes every collection by dropping
    /// the clients and waits for the actors to drain.
    ///
    /// Clones of the clients held elsewhere (dashboards, forms) keep their
    /// actors running; drop them first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");
        self.session.shutdown().await;

        drop(self.ledger);
        drop(self.profiles);
        drop(self.session);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn spawn_collection<T: LedgerRecord>(
    config: &Config,
    handles: &mut Vec<JoinHandle<()>>,
) -> LedgerClient<T> {
    let (actor, inner) = ledger::new::<T>(config.channel_capacity);
    handles.push(tokio::spawn(actor.run(())));
    LedgerClient::new(inner, config.cas_attempts)
}
