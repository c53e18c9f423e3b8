//! In-process credential provider.
use super::password::{hash_password, verify_password};
use super::{AuthError, AuthState, CredentialProvider, Identity};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

struct Account {
    uid: String,
    email: String,
    password_hash: String,
}

#[derive(Default)]
struct State {
    /// Keyed by normalized email.
    accounts: HashMap<String, Account>,
    current: AuthState,
    subscribers: Vec<mpsc::UnboundedSender<AuthState>>,
    reset_requests: Vec<String>,
}

impl State {
    fn transition(&mut self, next: AuthState) {
        if self.current == next {
            return;
        }
        self.current = next;
        let current = &self.current;
        self.subscribers.retain(|tx| tx.send(current.clone()).is_ok());
    }
}

/// Accounts held in memory with Argon2-hashed passwords.
///
/// One signed-in identity at a time, like a single browser session.
/// Password-reset requests are recorded instead of delivered.
pub struct LocalCredentialProvider {
    min_password_len: usize,
    state: Mutex<State>,
}

impl LocalCredentialProvider {
    pub fn new(min_password_len: usize) -> Self {
        Self {
            min_password_len,
            state: Mutex::new(State::default()),
        }
    }

    /// Emails a reset was requested for, oldest first.
    pub fn reset_requests(&self) -> Vec<String> {
        self.state.lock().reset_requests.clone()
    }

    pub fn current(&self) -> AuthState {
        self.state.lock().current.clone()
    }
}

fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AuthError::InvalidEmail(email)),
    }
}

#[async_trait]
impl CredentialProvider for LocalCredentialProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = normalize_email(email)?;
        if password.chars().count() < self.min_password_len {
            return Err(AuthError::WeakPassword(self.min_password_len));
        }
        if self.state.lock().accounts.contains_key(&email) {
            return Err(AuthError::EmailInUse(email));
        }

        let password_hash = hash_password(password)?;
        let identity = Identity {
            uid: Uuid::new_v4().simple().to_string(),
            email: email.clone(),
        };

        let mut state = self.state.lock();
        if state.accounts.contains_key(&email) {
            return Err(AuthError::EmailInUse(email));
        }
        state.accounts.insert(
            email.clone(),
            Account {
                uid: identity.uid.clone(),
                email,
                password_hash,
            },
        );
        state.transition(Some(identity.clone()));
        info!(uid = %identity.uid, "Account created");
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = normalize_email(email).map_err(|_| AuthError::InvalidCredentials)?;
        let (identity, password_hash) = {
            let state = self.state.lock();
            let account = state
                .accounts
                .get(&email)
                .ok_or(AuthError::InvalidCredentials)?;
            let identity = Identity {
                uid: account.uid.clone(),
                email: account.email.clone(),
            };
            (identity, account.password_hash.clone())
        };

        if !verify_password(&password_hash, password) {
            warn!(uid = %identity.uid, "Sign-in refused");
            return Err(AuthError::InvalidCredentials);
        }

        self.state.lock().transition(Some(identity.clone()));
        info!(uid = %identity.uid, "Signed in");
        Ok(identity)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let email = normalize_email(email)?;
        let mut state = self.state.lock();
        if !state.accounts.contains_key(&email) {
            return Err(AuthError::UserNotFound(email));
        }
        debug!(%email, "Password reset requested");
        state.reset_requests.push(email);
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.state.lock().transition(None);
        info!("Signed out");
        Ok(())
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthState> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.lock();
        // Cannot fail: the receiver is still in hand.
        let _ = tx.send(state.current.clone());
        state.subscribers.push(tx);
        rx
    }
}
