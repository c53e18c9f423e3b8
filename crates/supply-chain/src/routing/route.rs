use std::fmt::Display;

/// The six role dashboards, one per [`Role`](crate::model::Role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardId {
    Farmer,
    Trader,
    Manufacturer,
    Distributor,
    Shops,
    User,
}

impl DashboardId {
    pub const ALL: [DashboardId; 6] = [
        DashboardId::Farmer,
        DashboardId::Trader,
        DashboardId::Manufacturer,
        DashboardId::Distributor,
        DashboardId::Shops,
        DashboardId::User,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            DashboardId::Farmer => "/farmer",
            DashboardId::Trader => "/trader",
            DashboardId::Manufacturer => "/manufacturer",
            DashboardId::Distributor => "/distributor",
            DashboardId::Shops => "/shops",
            DashboardId::User => "/user",
        }
    }
}

/// Every destination the application knows. Unknown paths are kept so the
/// error view can show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    ForgotPassword,
    /// `/`: dispatches to the signed-in role's dashboard.
    Home,
    Dashboard(DashboardId),
    NotFound(String),
}

impl Route {
    /// Exact match on the path; a single trailing slash is ignored.
    pub fn parse(path: &str) -> Route {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::SignUp,
            "/forgot-password" => Route::ForgotPassword,
            other => DashboardId::ALL
                .into_iter()
                .find(|d| d.path() == other)
                .map(Route::Dashboard)
                .unwrap_or_else(|| Route::NotFound(path.to_string())),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => "/login",
            Route::SignUp => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Home => "/",
            Route::Dashboard(d) => d.path(),
            Route::NotFound(path) => path,
        }
    }

    /// Reachable without a session. The error view is public too.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::SignUp | Route::ForgotPassword | Route::NotFound(_)
        )
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
