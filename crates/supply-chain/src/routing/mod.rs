//! # Routing
//!
//! Path parsing, the authorization [`gate`], the shared role [`resolver`],
//! and [`navigate`], which combines them into the view to show.

pub mod gate;
pub mod navigator;
pub mod resolver;
mod route;

pub use gate::{check, GateDecision};
pub use navigator::{navigate, View};
pub use resolver::{dashboard_for, resolve, RoleView};
pub use route::{DashboardId, Route};
