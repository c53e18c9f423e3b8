use super::{SessionError, SessionSnapshot};
use crate::auth::{AuthError, AuthState, CredentialProvider, Identity};
use crate::clients::ProfileClient;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

enum Command {
    Refresh {
        respond_to: oneshot::Sender<SessionSnapshot>,
    },
    Stop,
}

/// Session state shared by every view.
///
/// A background task follows the provider's transitions. For each one it
/// looks up the profile of the new identity and then publishes exactly one
/// new [`SessionSnapshot`]. Refresh requests go through the same task, so a
/// lookup can never overwrite the result of a later transition.
pub struct SessionStore {
    provider: Arc<dyn CredentialProvider>,
    state: watch::Receiver<SessionSnapshot>,
    commands: mpsc::Sender<Command>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl SessionStore {
    /// Subscribes to the provider and starts following it. The store is
    /// pending until the provider's first report has been resolved.
    pub fn start(provider: Arc<dyn CredentialProvider>, profiles: ProfileClient) -> Self {
        let (state_tx, state_rx) = watch::channel(SessionSnapshot::pending());
        let (commands_tx, commands_rx) = mpsc::channel(8);
        let tracker = Tracker {
            profiles,
            identity: None,
            state: state_tx,
        };
        let handle = tokio::spawn(tracker.run(provider.subscribe(), commands_rx));

        Self {
            provider,
            state: state_rx,
            commands: commands_tx,
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.clone()
    }

    /// Waits until the first provider report has been resolved.
    pub async fn resolved(&self) -> SessionSnapshot {
        let mut rx = self.state.clone();
        if let Ok(snapshot) = rx.wait_for(|s| !s.loading).await {
            return snapshot.clone();
        }
        let snapshot = rx.borrow().clone();
        snapshot
    }

    /// Looks the current identity's profile up again and publishes the result.
    ///
    /// Used right after sign-up, when the identity was reported before its
    /// profile had been written.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<SessionSnapshot, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.commands
            .send(Command::Refresh { respond_to })
            .await
            .map_err(|_| SessionError::Stopped)?;
        response.await.map_err(|_| SessionError::Stopped)
    }

    /// Asks the provider to end the session. The local state changes only
    /// when the provider reports the transition; a failure leaves it as is.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await.inspect_err(|e| {
            warn!(error = %e, "Sign-out failed");
        })
    }

    /// Stops following the provider. Later calls return at once.
    pub async fn shutdown(&self) {
        let _ = self.commands.send(Command::Stop).await;
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(error = %e, "Session task ended abnormally");
            }
        }
    }
}

struct Tracker {
    profiles: ProfileClient,
    identity: Option<Identity>,
    state: watch::Sender<SessionSnapshot>,
}

impl Tracker {
    async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<AuthState>,
        mut commands: mpsc::Receiver<Command>,
    ) {
        info!("Session store started");
        loop {
            tokio::select! {
                // Transitions already queued are applied before a refresh.
                biased;
                event = events.recv() => match event {
                    Some(next) => self.transition(next).await,
                    None => break,
                },
                command = commands.recv() => match command {
                    Some(Command::Refresh { respond_to }) => {
                        let snapshot = self.resolve().await;
                        self.state.send_replace(snapshot.clone());
                        let _ = respond_to.send(snapshot);
                    }
                    Some(Command::Stop) | None => break,
                },
            }
        }
        info!("Session store stopped");
    }

    async fn transition(&mut self, next: AuthState) {
        debug!(uid = next.as_ref().map(|i| i.uid.as_str()), "Auth transition");
        self.identity = next;
        let snapshot = self.resolve().await;
        info!(
            signed_in = snapshot.identity.is_some(),
            role = snapshot.role_tag(),
            "Session updated"
        );
        self.state.send_replace(snapshot);
    }

    async fn resolve(&self) -> SessionSnapshot {
        let Some(identity) = self.identity.clone() else {
            return SessionSnapshot::signed_out();
        };

        match self.profiles.find(&identity.uid).await {
            Ok(Some(profile)) => {
                SessionSnapshot::signed_in(identity, Some(profile.name), Some(profile.user_type))
            }
            Ok(None) => {
                debug!(uid = %identity.uid, "No profile yet");
                SessionSnapshot::signed_in(identity, None, None)
            }
            Err(e) => {
                warn!(uid = %identity.uid, error = %e, "Profile lookup failed");
                SessionSnapshot::signed_in(identity, None, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, Profile, Role};
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;
    use async_trait::async_trait;

    /// Provider whose transitions are driven by the test.
    #[derive(Default)]
    struct ScriptedProvider {
        subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthState>>>,
        fail_sign_out: bool,
    }

    impl ScriptedProvider {
        fn emit(&self, state: AuthState) {
            for tx in self.subscribers.lock().iter() {
                let _ = tx.send(state.clone());
            }
        }
    }

    #[async_trait]
    impl CredentialProvider for ScriptedProvider {
        async fn sign_up(&self, _: &str, _: &str) -> Result<Identity, AuthError> {
            Err(AuthError::InvalidCredentials)
        }
        async fn sign_in(&self, _: &str, _: &str) -> Result<Identity, AuthError> {
            Err(AuthError::InvalidCredentials)
        }
        async fn send_password_reset(&self, _: &str) -> Result<(), AuthError> {
            Ok(())
        }
        async fn sign_out(&self) -> Result<(), AuthError> {
            if self.fail_sign_out {
                return Err(AuthError::SignOut("network down".into()));
            }
            self.emit(None);
            Ok(())
        }
        fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthState> {
            let (tx, rx) = mpsc::unbounded_channel();
            self.subscribers.lock().push(tx);
            rx
        }
    }

    fn identity(uid: &str) -> Identity {
        Identity {
            uid: uid.into(),
            email: format!("{uid}@farm.test"),
        }
    }

    async fn next_snapshot(rx: &mut watch::Receiver<SessionSnapshot>) -> SessionSnapshot {
        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        snapshot
    }

    #[tokio::test]
    async fn test_pending_until_the_provider_reports() {
        let provider = Arc::new(ScriptedProvider::default());
        let mock = MockClient::<Profile>::new();
        let store = SessionStore::start(provider.clone(), ProfileClient::new(mock.client()));
        let mut rx = store.subscribe();

        assert!(store.snapshot().loading);

        provider.emit(None);
        let snapshot = next_snapshot(&mut rx).await;
        assert_eq!(snapshot, SessionSnapshot::signed_out());
    }

    #[tokio::test]
    async fn test_one_replacement_per_transition_after_lookup() {
        let provider = Arc::new(ScriptedProvider::default());
        let mut mock = MockClient::<Profile>::new();
        mock.expect_get(DocumentId::from("uid-1")).return_ok(Some(Profile::new(
            "uid-1".into(),
            "Asha",
            "uid-1@farm.test",
            "555",
            Role::Farmer,
        )));
        let store = SessionStore::start(provider.clone(), ProfileClient::new(mock.client()));
        let mut rx = store.subscribe();

        provider.emit(Some(identity("uid-1")));
        let snapshot = next_snapshot(&mut rx).await;

        assert_eq!(snapshot.identity, Some(identity("uid-1")));
        assert_eq!(snapshot.name.as_deref(), Some("Asha"));
        assert_eq!(snapshot.role(), Some(Role::Farmer));
        assert!(!rx.has_changed().unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_or_unreadable_profile_leaves_role_unresolved() {
        let provider = Arc::new(ScriptedProvider::default());
        let mut mock = MockClient::<Profile>::new();
        mock.expect_get(DocumentId::from("uid-1")).return_ok(None);
        mock.expect_get(DocumentId::from("uid-2"))
            .return_err(FrameworkError::ActorClosed);
        let store = SessionStore::start(provider.clone(), ProfileClient::new(mock.client()));
        let mut rx = store.subscribe();

        provider.emit(Some(identity("uid-1")));
        let first = next_snapshot(&mut rx).await;
        assert!(first.awaiting_profile());
        assert!(first.is_authenticated());

        provider.emit(Some(identity("uid-2")));
        let second = next_snapshot(&mut rx).await;
        assert_eq!(second.identity, Some(identity("uid-2")));
        assert!(second.awaiting_profile());
    }

    #[tokio::test]
    async fn test_refresh_picks_up_a_late_profile() {
        let provider = Arc::new(ScriptedProvider::default());
        let mut mock = MockClient::<Profile>::new();
        mock.expect_get(DocumentId::from("uid-1")).return_ok(None);
        mock.expect_get(DocumentId::from("uid-1")).return_ok(Some(Profile::new(
            "uid-1".into(),
            "Mill Co",
            "uid-1@farm.test",
            "",
            Role::Manufacturer,
        )));
        let store = SessionStore::start(provider.clone(), ProfileClient::new(mock.client()));

        provider.emit(Some(identity("uid-1")));
        let refreshed = store.refresh().await.unwrap();

        assert_eq!(refreshed.role(), Some(Role::Manufacturer));
        assert_eq!(store.snapshot(), refreshed);
        mock.verify();
    }

    #[tokio::test]
    async fn test_failed_sign_out_keeps_the_session() {
        let provider = Arc::new(ScriptedProvider {
            fail_sign_out: true,
            ..Default::default()
        });
        let mut mock = MockClient::<Profile>::new();
        mock.expect_get(DocumentId::from("uid-1")).return_ok(None);
        let store = SessionStore::start(provider.clone(), ProfileClient::new(mock.client()));
        let mut rx = store.subscribe();

        provider.emit(Some(identity("uid-1")));
        next_snapshot(&mut rx).await;

        let err = store.sign_out().await.unwrap_err();
        assert_eq!(err, AuthError::SignOut("network down".into()));
        assert_eq!(store.snapshot().identity, Some(identity("uid-1")));
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_tracker() {
        let provider = Arc::new(ScriptedProvider::default());
        let mock = MockClient::<Profile>::new();
        let store = SessionStore::start(provider.clone(), ProfileClient::new(mock.client()));

        tokio::time::timeout(std::time::Duration::from_secs(1), store.shutdown())
            .await
            .expect("tracker should stop on shutdown");
        assert!(matches!(store.refresh().await, Err(SessionError::Stopped)));
        store.shutdown().await;
    }
}
