//! Passphrase-based key derivation using iterated SHA-256.
//!
//! The passphrase bytes seed a hash chain: each round hashes the previous
//! round's digest, and the final 32-byte digest is the master key.  The
//! round count makes each passphrase guess expensive.
//!
//! No salt is mixed in.  The same passphrase always yields the same key.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::errors::{PwVaultError, Result};

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Default number of hash rounds.
pub const DEFAULT_ITERATIONS: u32 = 1_000_000;

/// Tunable key derivation parameters.
///
/// Mirrors the `kdf_iterations` field in `Settings`.  The vault file does
/// not record the round count, so a vault can only be opened with the
/// count it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Number of SHA-256 rounds (default: 1 000 000).
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Derive a 32-byte master key using the default round count.
pub fn derive_master_key(passphrase: &[u8]) -> [u8; KEY_LEN] {
    hash_chain(passphrase, DEFAULT_ITERATIONS)
}

/// Derive a 32-byte master key with explicit parameters.
///
/// Rejects a round count of zero, which would leave the key undefined.
pub fn derive_master_key_with_params(
    passphrase: &[u8],
    params: &KdfParams,
) -> Result<[u8; KEY_LEN]> {
    if params.iterations < 1 {
        return Err(PwVaultError::KeyDerivationFailed(
            "iterations must be at least 1".into(),
        ));
    }
    Ok(hash_chain(passphrase, params.iterations))
}

fn hash_chain(seed: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut digest: [u8; KEY_LEN] = Sha256::digest(seed).into();

    for _ in 1..iterations {
        let next: [u8; KEY_LEN] = Sha256::digest(digest).into();
        digest.zeroize();
        digest = next;
    }

    digest
}
