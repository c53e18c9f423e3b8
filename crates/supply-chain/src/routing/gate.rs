use super::Route;
use crate::session::SessionSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not resolved yet: render nothing, decide later.
    Pending,
    Allow,
    /// The requested destination is dropped, not remembered.
    RedirectToSignIn,
}

/// Decides whether `route` may render for `session`. Pure.
///
/// Public routes always pass. Protected ones wait while the session is
/// pending and otherwise require an identity.
pub fn check(route: &Route, session: &SessionSnapshot) -> GateDecision {
    if route.is_public() {
        return GateDecision::Allow;
    }
    if session.loading {
        return GateDecision::Pending;
    }
    if session.identity.is_some() {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToSignIn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Identity;
    use crate::routing::DashboardId;

    fn protected() -> Vec<Route> {
        let mut routes = vec![Route::Home];
        routes.extend(DashboardId::ALL.map(Route::Dashboard));
        routes
    }

    fn signed_in() -> SessionSnapshot {
        SessionSnapshot::signed_in(
            Identity {
                uid: "uid-1".into(),
                email: "a@b.test".into(),
            },
            None,
            None,
        )
    }

    #[test]
    fn test_never_allows_without_identity() {
        for route in protected() {
            assert_eq!(
                check(&route, &SessionSnapshot::signed_out()),
                GateDecision::RedirectToSignIn
            );
        }
    }

    #[test]
    fn test_never_redirects_while_pending() {
        for route in protected() {
            assert_eq!(check(&route, &SessionSnapshot::pending()), GateDecision::Pending);
        }
    }

    #[test]
    fn test_identity_without_role_is_allowed() {
        for route in protected() {
            assert_eq!(check(&route, &signed_in()), GateDecision::Allow);
        }
    }

    #[test]
    fn test_public_routes_pass_in_any_state() {
        for session in [SessionSnapshot::pending(), SessionSnapshot::signed_out(), signed_in()] {
            assert_eq!(check(&Route::Login, &session), GateDecision::Allow);
            assert_eq!(
                check(&Route::NotFound("/x".into()), &session),
                GateDecision::Allow
            );
        }
    }
}
