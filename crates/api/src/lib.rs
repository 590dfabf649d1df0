//! HTTP API: server, routing, and request/response mapping for the account ledger.

pub mod app;
pub mod config;
