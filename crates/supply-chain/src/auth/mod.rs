//! # Authentication
//!
//! The [`CredentialProvider`] seam and its in-process implementation,
//! [`LocalCredentialProvider`]. Everything above this module only sees
//! [`Identity`] values and the provider's transition stream.

pub mod error;
pub mod local;
mod password;
pub mod provider;

pub use error::AuthError;
pub use local::LocalCredentialProvider;
pub use provider::{AuthState, CredentialProvider, Identity};
