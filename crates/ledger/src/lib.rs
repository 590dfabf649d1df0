//! Account ledger: balances keyed by customer, with create / fund / withdraw.
//!
//! Pure domain logic only: no HTTP. The store is injected, so every test
//! builds its own isolated ledger.

pub mod account;
pub mod ledger;
pub mod store;

pub use account::Account;
pub use ledger::{AccountLedger, AmountPolicy};
pub use store::{AccountStore, InMemoryAccountStore};
