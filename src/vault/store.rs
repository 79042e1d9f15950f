//! High-level vault operations used by the menu loop.
//!
//! `VaultStore` ties the key derivation, cipher, and file format layers
//! together.  It holds the decrypted records and the master key for the
//! session, and rewrites the whole vault file after every mutation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::cipher::{decrypt, encrypt, generate_iv};
use crate::crypto::kdf::KdfParams;
use crate::crypto::keys::MasterKey;
use crate::errors::{PwVaultError, Result};

use super::format::{self, VaultFile};
use super::record::{Record, RecordSummary};

/// An unlocked vault.  Obtain one with `VaultStore::unlock`.
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Key derivation parameters used for this session.
    params: KdfParams,

    /// Decrypted records in insertion order.
    records: Vec<Record>,

    /// The derived master key (zeroized on drop).
    master_key: MasterKey,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Unlock the vault at `path`, creating it on first run.
    ///
    /// An error while checking whether the file exists is reported as `Io`
    /// rather than treated as a first run.
    ///
    /// If the file exists it is decrypted with the key derived from
    /// `passphrase`.  Any failure to decrypt or parse is reported as
    /// `WrongPasswordOrCorrupt` without saying which.
    ///
    /// If the file does not exist, `confirm` is called to read the
    /// passphrase a second time.  On a mismatch nothing is written;
    /// on a match an empty vault is saved immediately.
    pub fn unlock<F>(path: &Path, passphrase: &[u8], params: &KdfParams, confirm: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Zeroizing<Vec<u8>>>,
    {
        let master_key = MasterKey::derive(passphrase, params)?;

        if path.try_exists()? {
            let raw = std::fs::read(path)?;
            let records = Self::decode(&raw, &master_key).map_err(|e| {
                debug!(error = %e, "vault unlock failed");
                PwVaultError::WrongPasswordOrCorrupt
            })?;
            info!(path = %path.display(), records = records.len(), "vault unlocked");

            return Ok(Self {
                path: path.to_path_buf(),
                params: *params,
                records,
                master_key,
            });
        }

        // First run: the passphrase must be typed twice.
        let confirmation = confirm()?;
        if confirmation.as_slice() != passphrase {
            return Err(PwVaultError::ConfirmationMismatch);
        }

        let store = Self {
            path: path.to_path_buf(),
            params: *params,
            records: Vec::new(),
            master_key,
        };
        store.persist()?;
        info!(path = %path.display(), "new vault created");

        Ok(store)
    }

    /// Split, decrypt, and decode the raw vault file contents.
    fn decode(raw: &[u8], master_key: &MasterKey) -> Result<Vec<Record>> {
        let file = format::parse_vault_bytes(raw)?;
        let plaintext = Zeroizing::new(decrypt(master_key.as_bytes(), &file.iv, &file.ciphertext)?);
        format::deserialize_records(&plaintext)
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Append a record and save.
    ///
    /// Fails with `DuplicateRecord` if a record with the same site and
    /// username already exists; the vault is left untouched.
    pub fn add_record(&mut self, site: &str, username: &str, password: &str) -> Result<()> {
        if self.records.iter().any(|r| r.matches(site, username)) {
            return Err(PwVaultError::DuplicateRecord {
                site: site.to_string(),
                username: username.to_string(),
            });
        }

        self.records.push(Record::new(site, username, password));
        self.persist()
    }

    /// Remove every record with the given site and username, then save.
    ///
    /// Returns the number of records removed.
    pub fn delete_record(&mut self, site: &str, username: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| !r.matches(site, username));
        let removed = before - self.records.len();

        if removed == 0 {
            return Err(PwVaultError::RecordNotFound(format!("'{username}' at '{site}'")));
        }

        self.persist()?;
        Ok(removed)
    }

    /// List all records in insertion order, without passwords.
    pub fn list_records(&self) -> Vec<RecordSummary> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| RecordSummary {
                index: i + 1,
                site: r.site.clone(),
                username: r.username.clone(),
            })
            .collect()
    }

    /// Look up a record by its 1-based listing index.
    pub fn record(&self, index: usize) -> Result<&Record> {
        index
            .checked_sub(1)
            .and_then(|i| self.records.get(i))
            .ok_or_else(|| PwVaultError::RecordNotFound(format!("#{index}")))
    }

    /// Return the password of the record at the 1-based `index`.
    pub fn reveal_password(&self, index: usize) -> Result<&str> {
        self.record(index).map(|r| r.password.as_str())
    }

    // ------------------------------------------------------------------
    // Master password
    // ------------------------------------------------------------------

    /// Re-key the vault under a new passphrase.
    ///
    /// `current` is checked by re-deriving its key and comparing it to the
    /// session key in constant time.  `new` and `confirm` must match
    /// byte for byte.  The vault is re-encrypted under a fresh IV; if that
    /// save fails, the old key stays in effect.
    pub fn change_master_password(
        &mut self,
        current: &[u8],
        new: &[u8],
        confirm: &[u8],
    ) -> Result<()> {
        let candidate = MasterKey::derive(current, &self.params)?;
        if !candidate.ct_eq(&self.master_key) {
            return Err(PwVaultError::WrongCurrentPassword);
        }

        if new != confirm {
            return Err(PwVaultError::ConfirmationMismatch);
        }

        let new_key = MasterKey::derive(new, &self.params)?;
        let old_key = std::mem::replace(&mut self.master_key, new_key);

        if let Err(e) = self.persist() {
            warn!("re-key save failed, keeping previous master key");
            self.master_key = old_key;
            return Err(e);
        }

        info!(path = %self.path.display(), "master password changed");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Encrypt all records under a fresh IV and overwrite the vault file.
    fn persist(&self) -> Result<()> {
        let mut plaintext = format::serialize_records(&self.records)?;
        let iv = generate_iv();

        let ciphertext = iv.and_then(|iv| {
            encrypt(self.master_key.as_bytes(), &iv, &plaintext).map(|ct| (ct, iv))
        });
        plaintext.zeroize();
        let (ciphertext, iv) = ciphertext?;

        format::write_vault_file(&self.path, &VaultFile { ciphertext, iv })?;
        debug!(records = self.records.len(), "vault saved");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of records in the vault.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the vault holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
