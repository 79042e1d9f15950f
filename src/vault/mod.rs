//! Vault module: encrypted record storage.
//!
//! This module provides:
//! - `Record` and `RecordSummary` types (`record`)
//! - Record-set encoding and the two-line vault file format (`format`)
//! - `VaultStore`, the unlocked session over a vault file (`store`)

pub mod format;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use format::VaultFile;
pub use record::{Record, RecordSummary};
pub use store::VaultStore;
