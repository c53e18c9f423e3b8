//! Starting, wiring and stopping the whole system.
//!
//! - [`SupplyChainSystem`] - spawns one actor per collection plus the profile
//!   store, builds the credential provider and session store on top, and
//!   tears everything down again in order.

pub mod system;

pub use system::*;
