use super::AuthError;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// An authenticated principal as issued by the credential provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

/// Auth state as seen by subscribers: `Some` while signed in.
pub type AuthState = Option<Identity>;

/// The credential issuer the session is built on.
///
/// Sign-up and sign-in leave the new identity signed in. Every change of the
/// signed-in identity is delivered to all subscribers, in order.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The receiver gets the current state right away, then each transition.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthState>;
}
