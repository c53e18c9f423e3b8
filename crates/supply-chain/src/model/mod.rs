//! Record shapes of every collection, plus identifiers and roles.
//!
//! Field names serialize exactly as the stored documents spell them
//! (`cropName`, `traderPrice`, `userType`, ...). The document key is never
//! part of the document body.

pub mod crop;
pub mod ids;
pub mod inventory;
pub mod listing;
pub mod order;
pub mod profile;
pub mod role;
pub mod trade;

pub use crop::*;
pub use ids::*;
pub use inventory::*;
pub use listing::*;
pub use order::*;
pub use profile::*;
pub use role::*;
pub use trade::*;
