//! # Clients
//!
//! Typed wrappers around the collection actors' `ResourceClient`s.

pub mod ledger;
pub mod ledger_client;
pub mod profile_client;

pub use ledger::Ledger;
pub use ledger_client::LedgerClient;
pub use profile_client::ProfileClient;
