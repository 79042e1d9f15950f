//! Record and RecordSummary types stored inside a vault.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// A single site/username/password entry.
///
/// Identity within a vault is the `(site, username)` pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub site: String,
    pub username: String,
    pub password: String,
}

impl Record {
    pub fn new(site: &str, username: &str, password: &str) -> Self {
        Self {
            site: site.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Returns `true` if this record has the given identity.
    ///
    /// Exact, case-sensitive comparison.
    pub fn matches(&self, site: &str, username: &str) -> bool {
        self.site == site && self.username == username
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("site", &self.site)
            .field("username", &self.username)
            .field("password", &"...")
            .finish()
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Listing projection of a record (no password).
///
/// Returned by `VaultStore::list_records` so callers can display
/// entries without touching any password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    /// 1-based position in insertion order.
    pub index: usize,
    pub site: String,
    pub username: String,
}
