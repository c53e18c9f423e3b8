//! # Role Dashboards
//!
//! One dashboard per role. Each keeps point-in-time copies of the
//! collections it shows ([`Slice`]), fills them concurrently, and patches
//! its own copies after its own successful writes. Nothing is pushed from
//! other sessions: two dashboards diverge until each reloads.
//!
//! Loading is split in two so it can outlive the view that started it:
//! `load()` issues a [`LoadToken`] and returns a detached future; `apply()`
//! takes the result only if no newer load has been applied and no local
//! write has succeeded since it was issued. A load whose view is gone is
//! simply never applied.

mod distributor;
mod farmer;
mod manufacturer;
mod notice;
mod shops;
mod slice;
mod stock;
mod trader;
mod user;

pub use distributor::{DistributorDashboard, DistributorLoad};
pub use farmer::{FarmerDashboard, FarmerLoad};
pub use manufacturer::{ManufacturerDashboard, ManufacturerLoad};
pub use notice::Notice;
pub use shops::{ShopsDashboard, ShopsLoad};
pub use slice::{LoadToken, Slice};
pub use trader::{TraderDashboard, TraderLoad};
pub use user::{UserDashboard, UserLoad};

use crate::clients::Ledger;
use crate::routing::{resolve, DashboardId, RoleView};
use crate::session::SessionSnapshot;
use tracing::info;

/// The dashboard of the signed-in role.
pub enum Dashboard {
    Farmer(FarmerDashboard),
    Trader(TraderDashboard),
    Manufacturer(ManufacturerDashboard),
    Distributor(DistributorDashboard),
    Shops(ShopsDashboard),
    User(UserDashboard),
}

/// Result of opening the dashboard for a session.
pub enum Opened {
    /// Signed in, profile not read yet.
    Loading,
    UnknownRole,
    Ready(Dashboard),
}

impl Dashboard {
    /// Picks the dashboard for the session's role through the same resolver
    /// `/` uses.
    pub fn open(session: &SessionSnapshot, ledger: &Ledger) -> Opened {
        if session.loading || session.awaiting_profile() {
            return Opened::Loading;
        }
        match resolve(session.role_tag()) {
            RoleView::Dashboard(id) => {
                info!(dashboard = id.path(), "Opening dashboard");
                Opened::Ready(Self::for_id(id, owner_name(session), ledger.clone()))
            }
            RoleView::UnknownRole => Opened::UnknownRole,
        }
    }

    pub fn for_id(id: DashboardId, owner: String, ledger: Ledger) -> Self {
        match id {
            DashboardId::Farmer => Dashboard::Farmer(FarmerDashboard::new(owner, ledger)),
            DashboardId::Trader => Dashboard::Trader(TraderDashboard::new(owner, ledger)),
            DashboardId::Manufacturer => {
                Dashboard::Manufacturer(ManufacturerDashboard::new(owner, ledger))
            }
            DashboardId::Distributor => {
                Dashboard::Distributor(DistributorDashboard::new(owner, ledger))
            }
            DashboardId::Shops => Dashboard::Shops(ShopsDashboard::new(owner, ledger)),
            DashboardId::User => Dashboard::User(UserDashboard::new(owner, ledger)),
        }
    }

    pub fn id(&self) -> DashboardId {
        match self {
            Dashboard::Farmer(_) => DashboardId::Farmer,
            Dashboard::Trader(_) => DashboardId::Trader,
            Dashboard::Manufacturer(_) => DashboardId::Manufacturer,
            Dashboard::Distributor(_) => DashboardId::Distributor,
            Dashboard::Shops(_) => DashboardId::Shops,
            Dashboard::User(_) => DashboardId::User,
        }
    }

    /// Loads every collection the dashboard shows and applies the result.
    pub async fn hydrate(&mut self) -> Vec<Notice> {
        match self {
            Dashboard::Farmer(d) => d.hydrate().await,
            Dashboard::Trader(d) => d.hydrate().await,
            Dashboard::Manufacturer(d) => d.hydrate().await,
            Dashboard::Distributor(d) => d.hydrate().await,
            Dashboard::Shops(d) => d.hydrate().await,
            Dashboard::User(d) => d.hydrate().await,
        }
    }
}

/// Name written into records this session produces.
fn owner_name(session: &SessionSnapshot) -> String {
    session
        .name
        .clone()
        .or_else(|| session.identity.as_ref().map(|i| i.email.clone()))
        .unwrap_or_default()
}
