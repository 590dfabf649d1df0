//! `bankledger-core` — domain primitives shared by the ledger and the HTTP layer.
//!
//! This crate contains **pure domain** types (no IO, no HTTP).

pub mod amount;
pub mod entity;
pub mod error;
pub mod id;

pub use amount::{display_amount, Amount};
pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::CustomerId;
