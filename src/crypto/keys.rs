//! In-memory master key handling.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::kdf::{derive_master_key_with_params, KdfParams, KEY_LEN};
use crate::errors::Result;

/// A wrapper around a 32-byte master key that automatically zeroes
/// its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    /// Create a new `MasterKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Derive a master key from a passphrase.
    ///
    /// The intermediate stack copy is wiped before returning.
    pub fn derive(passphrase: &[u8], params: &KdfParams) -> Result<Self> {
        let mut raw = derive_master_key_with_params(passphrase, params)?;
        let key = Self::new(raw);
        raw.zeroize();
        Ok(key)
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// Compare two keys without leaking the position of the first difference.
    pub fn ct_eq(&self, other: &MasterKey) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey(..)")
    }
}
