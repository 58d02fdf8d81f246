//! # LedgerDesk Enrichment
//!
//! Display-only decorators that dress up computed results before rendering:
//! sequential display ids, round-robin agent assignment, and the Bikram
//! Sambat date conversion.
//!
//! Nothing in this crate is derived from a domain fact. The metrics crates
//! stay pure; callers apply these decorators afterwards, and every function
//! here is deterministic — sequences and rosters are supplied by the caller,
//! never drawn from entropy or a clock.

// Declare the modules that make up this crate.
pub mod agents;
pub mod calendar;
pub mod ids;

// Re-export the key components to provide a clean public API.
pub use agents::AgentRoster;
pub use calendar::to_bikram_sambat;
pub use ids::{record_no, sequential_id};
