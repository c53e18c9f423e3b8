//! # Session Store
//!
//! Tracks who is signed in and which role their profile carries. Views read
//! [`SessionSnapshot`]s; they never talk to the credential provider for
//! state.

mod snapshot;
mod store;

pub use snapshot::SessionSnapshot;
pub use store::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session store has stopped")]
    Stopped,
}
