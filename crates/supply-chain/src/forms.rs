//! # Auth Forms
//!
//! The sign-up, log-in, forgot-password and log-out actions as a user
//! triggers them. Every failure is caught here and turned into the fixed
//! message the form shows; nothing propagates past [`FormOutcome`].

use crate::auth::CredentialProvider;
use crate::clients::ProfileClient;
use crate::model::{DocumentId, Profile, Role};
use crate::routing::Route;
use crate::session::SessionStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const SELECT_USER_TYPE: &str = "Please select a user type";
pub const SIGN_UP_SUCCEEDED: &str = "Account created successfully!";
pub const SIGN_UP_FAILED: &str = "Error signing up. Please try again.";
pub const SIGN_IN_FAILED: &str = "Failed to log in. Please check your credentials.";
pub const RESET_SENT: &str = "Password reset email sent! Please check your inbox.";
pub const RESET_FAILED: &str = "Failed to send reset email. Please try again.";
pub const SIGN_OUT_FAILED: &str = "Failed to log out. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

/// What a form shows after submission, and where it navigates next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub message: Option<FormMessage>,
    pub redirect: Option<Route>,
}

impl FormOutcome {
    fn success(message: &str, redirect: Option<Route>) -> Self {
        Self {
            message: Some(FormMessage::Success(message.to_string())),
            redirect,
        }
    }

    fn error(message: &str) -> Self {
        Self {
            message: Some(FormMessage::Error(message.to_string())),
            redirect: None,
        }
    }

    fn redirect(route: Route) -> Self {
        Self {
            message: None,
            redirect: Some(route),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.message, Some(FormMessage::Error(_)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub user_type: Option<Role>,
}

#[derive(Clone)]
pub struct AuthForms {
    provider: Arc<dyn CredentialProvider>,
    profiles: ProfileClient,
    session: Arc<SessionStore>,
}

impl AuthForms {
    pub fn new(
        provider: Arc<dyn CredentialProvider>,
        profiles: ProfileClient,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            provider,
            profiles,
            session,
        }
    }

    /// Creates the account, writes its profile under the new identity id,
    /// then refreshes the session so `/` can dispatch on the role.
    ///
    /// When the profile write fails the new identity is signed out again, so
    /// the session does not sit on an identity with no profile. The account
    /// itself stays with the provider; the email cannot be reused for a
    /// second sign-up.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn sign_up(&self, form: SignUpForm) -> FormOutcome {
        let Some(role) = form.user_type else {
            return FormOutcome::error(SELECT_USER_TYPE);
        };

        let identity = match self.provider.sign_up(&form.email, &form.password).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "Sign-up refused");
                return FormOutcome::error(SIGN_UP_FAILED);
            }
        };

        let profile = Profile::new(
            DocumentId::from(identity.uid.as_str()),
            form.name,
            identity.email.clone(),
            form.phone,
            role,
        );
        if let Err(e) = self.profiles.save(profile).await {
            warn!(uid = %identity.uid, error = %e, "Profile write failed");
            if let Err(e) = self.provider.sign_out().await {
                warn!(error = %e, "Could not sign out after the failed profile write");
            }
            return FormOutcome::error(SIGN_UP_FAILED);
        }

        if let Err(e) = self.session.refresh().await {
            warn!(error = %e, "Session refresh after sign-up failed");
        }
        info!(uid = %identity.uid, %role, "Signed up");
        FormOutcome::success(SIGN_UP_SUCCEEDED, Some(Route::Home))
    }

    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> FormOutcome {
        match self.provider.sign_in(email, password).await {
            Ok(_) => FormOutcome::redirect(Route::Home),
            Err(e) => {
                warn!(error = %e, "Sign-in refused");
                FormOutcome::error(SIGN_IN_FAILED)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> FormOutcome {
        match self.provider.send_password_reset(email).await {
            Ok(()) => FormOutcome::success(RESET_SENT, None),
            Err(e) => {
                warn!(error = %e, "Password reset refused");
                FormOutcome::error(RESET_FAILED)
            }
        }
    }

    /// Leaves the local session alone when the provider refuses.
    pub async fn log_out(&self) -> FormOutcome {
        match self.session.sign_out().await {
            Ok(()) => FormOutcome::redirect(Route::Login),
            Err(_) => FormOutcome::error(SIGN_OUT_FAILED),
        }
    }
}
