//! Role tag to dashboard. Both `/` and the dashboard switch call [`resolve`].
use super::DashboardId;
use crate::model::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleView {
    Dashboard(DashboardId),
    /// Terminal: shown as is, never retried.
    UnknownRole,
}

pub fn dashboard_for(role: Role) -> DashboardId {
    match role {
        Role::Farmer => DashboardId::Farmer,
        Role::Trader => DashboardId::Trader,
        Role::Manufacturer => DashboardId::Manufacturer,
        Role::Distributor => DashboardId::Distributor,
        Role::Shops => DashboardId::Shops,
        Role::User => DashboardId::User,
    }
}

/// Total over every input. Absent, blank and out-of-set tags all give
/// [`RoleView::UnknownRole`].
pub fn resolve(role: Option<&str>) -> RoleView {
    match role.map(str::parse::<Role>) {
        Some(Ok(role)) => RoleView::Dashboard(dashboard_for(role)),
        _ => RoleView::UnknownRole,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_role_has_its_own_dashboard() {
        let dashboards: HashSet<_> = Role::ALL
            .into_iter()
            .map(|role| resolve(Some(role.as_str())))
            .collect();
        assert_eq!(dashboards.len(), Role::ALL.len());
        assert!(!dashboards.contains(&RoleView::UnknownRole));
    }

    #[test]
    fn test_resolution_is_stable() {
        for role in Role::ALL {
            assert_eq!(resolve(Some(role.as_str())), resolve(Some(role.as_str())));
        }
    }

    #[test]
    fn test_anything_else_is_unknown() {
        for tag in [None, Some(""), Some("farmer"), Some("Admin"), Some(" Farmer")] {
            assert_eq!(resolve(tag), RoleView::UnknownRole, "{tag:?}");
        }
    }
}
