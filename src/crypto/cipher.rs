//! AES-256-CBC encryption with PKCS#7 padding.
//!
//! The caller supplies the IV.  It must be fresh for every encryption under
//! the same key; `generate_iv` draws one from the OS RNG.  The IV is not
//! secret and is stored next to the ciphertext in the vault file.
//!
//! CBC carries no authentication tag.  A wrong key, a corrupted ciphertext,
//! and a mismatched IV all surface as the same `DecryptionFailed`, and
//! occasionally a wrong key still produces valid padding, which the vault
//! codec then rejects when parsing.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{PwVaultError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size, and therefore the IV length, in bytes.
pub const IV_LEN: usize = 16;

/// Generate a random 16-byte IV.
pub fn generate_iv() -> Result<[u8; IV_LEN]> {
    let mut iv = [0u8; IV_LEN];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| PwVaultError::EncryptionFailed(format!("OS RNG unavailable: {e}")))?;
    Ok(iv)
}

/// Encrypt `plaintext` with a 32-byte `key` and 16-byte `iv`.
pub fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| PwVaultError::EncryptionFailed(format!("invalid key or IV length: {e}")))?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt data produced by `encrypt` with the same key and IV.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| PwVaultError::DecryptionFailed)?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PwVaultError::DecryptionFailed)
}
