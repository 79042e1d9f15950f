//! Cryptographic primitives for pwvault.
//!
//! This module provides:
//! - AES-256-CBC encryption and decryption (`cipher`)
//! - Iterated SHA-256 passphrase key derivation (`kdf`)
//! - The zeroizing `MasterKey` wrapper (`keys`)

pub mod cipher;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_master_key, ...};
pub use cipher::{decrypt, encrypt, generate_iv, IV_LEN};
pub use kdf::{derive_master_key, derive_master_key_with_params, KdfParams, KEY_LEN};
pub use keys::MasterKey;
