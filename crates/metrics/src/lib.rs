//! # LedgerDesk Metrics Engine
//!
//! This crate derives every number the dashboard displays: client summaries,
//! renewal windows and urgency buckets, daybook income/expense totals, and
//! ledger breakdowns. It acts as the single source of truth for derived
//! values.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   storage or UI. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless calculator.
//!   It takes record snapshots plus an explicit reference date as input and
//!   produces report structs as output. It never reads the system clock, which
//!   makes every date-window threshold deterministic and easy to test.
//! - **Sum the Source:** Every derived total is the sum of a defined filtered
//!   subset of the raw records. No derived value is computed from another
//!   derived value, so rounding can never compound.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The main struct that contains the calculation logic.
//! - `ClientSummary`, `LedgerSummary`, `DaybookTotals`, `RenewalBuckets`,
//!   `OverdueEntry`: The standardized report structs.
//! - `DaybookWindow`: The day/week/month membership test.
//! - `MetricsError`: The specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod window;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{DEFAULT_RENEWAL_HORIZON_DAYS, MetricsEngine};
pub use error::MetricsError;
pub use report::{
    ClientSummary, DaybookTotals, LedgerSummary, OverdueEntry, RenewalBuckets, Urgency,
};
pub use window::DaybookWindow;
