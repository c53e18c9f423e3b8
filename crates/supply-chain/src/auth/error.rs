/// Failures reported by a credential provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),
    #[error("An account already exists for {0}")]
    EmailInUse(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("No account for {0}")]
    UserNotFound(String),
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error("Sign-out failed: {0}")]
    SignOut(String),
}
