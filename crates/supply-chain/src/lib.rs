//! # Supply Chain Ledger
//!
//! A role-based ledger shared by farmers, traders, manufacturers,
//! distributors, shops and end users. Each participant signs in, is routed
//! to the dashboard of their role, and reads and writes the shared
//! collections that role is allowed to touch.
//!
//! ## Layers
//!
//! - **[model]**: record shapes of every collection, [`Role`](model::Role) and ids.
//! - **[ledger]**: the `ActorEntity` behaviour of each record (validation,
//!   compare-and-swap quantity) and the collection/role capability table.
//! - **[clients]**: capability-checked [`LedgerClient`](clients::LedgerClient)s
//!   and the profile store.
//! - **[auth]**: the credential provider seam and its local implementation.
//! - **[session]**: the [`SessionStore`](session::SessionStore), following the
//!   provider and resolving each identity's profile.
//! - **[routing]**: the authorization gate, the role resolver and [`navigate`](routing::navigate).
//! - **[forms]** and **[dashboard]**: what the user drives, with every failure
//!   turned into a message.
//! - **[lifecycle]**: starting and stopping the whole system from a [`Config`](config::Config).
//!
//! Every collection runs as one `actor_framework::ResourceActor`; see
//! [`actor_framework::mock`] for testing clients without spawning actors.

pub mod auth;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod forms;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod routing;
pub mod session;
