//! # LedgerDesk Directory
//!
//! This crate derives the "Connections" view: contact cards projected from
//! client records, plus the search/location/status filtering the connections
//! page offers.
//!
//! Like the metrics crates, this is a pure projection layer. Cards are built
//! from a snapshot and filtered in memory; nothing here writes back to the
//! client records.

// Declare the modules that make up this crate.
pub mod connection;
pub mod filter;

// Re-export the core types to provide a clean public API.
pub use connection::{ConnectionCard, connections_from};
pub use filter::{ConnectionFilter, filter_connections};
