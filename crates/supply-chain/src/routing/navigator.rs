use super::gate::{check, GateDecision};
use super::resolver::{resolve, RoleView};
use super::{DashboardId, Route};
use crate::session::SessionSnapshot;
use tracing::debug;

/// What the application shows for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    SignIn,
    SignUp,
    ForgotPassword,
    Dashboard(DashboardId),
    UnknownRole,
    Error(String),
}

/// Routes `path` through the gate and, for `/`, the role resolver.
///
/// A signed-in session whose profile has not been read yet shows
/// [`View::Loading`] on `/` rather than the unknown-role view. Direct
/// dashboard paths render for any signed-in session; writes from the wrong
/// role are still refused by the ledger.
pub fn navigate(path: &str, session: &SessionSnapshot) -> View {
    let route = Route::parse(path);
    let view = match check(&route, session) {
        GateDecision::Pending => View::Loading,
        GateDecision::RedirectToSignIn => View::SignIn,
        GateDecision::Allow => match route {
            Route::Login => View::SignIn,
            Route::SignUp => View::SignUp,
            Route::ForgotPassword => View::ForgotPassword,
            Route::NotFound(path) => View::Error(path),
            Route::Dashboard(dashboard) => View::Dashboard(dashboard),
            Route::Home if session.awaiting_profile() => View::Loading,
            Route::Home => match resolve(session.role_tag()) {
                RoleView::Dashboard(dashboard) => View::Dashboard(dashboard),
                RoleView::UnknownRole => View::UnknownRole,
            },
        },
    };
    debug!(path, ?view, "Navigated");
    view
}
