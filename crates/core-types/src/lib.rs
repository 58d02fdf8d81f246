pub mod enums;
pub mod error;
pub mod serde_ext;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{ClientStatus, DaybookEntryKind, TransactionKind};
pub use error::CoreError;
pub use structs::{ClientRecord, DaybookEntry, LedgerTransaction};
