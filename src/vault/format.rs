//! Vault file format and record-set encoding.
//!
//! A vault file is two lines of standard base64:
//!
//! ```text
//! line 1: base64(ciphertext)
//! line 2: base64(iv)
//! ```
//!
//! There is no magic, no version byte, and no header.  The ciphertext
//! decrypts to the JSON encoding of the ordered record list.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::debug;

use super::record::Record;
use crate::crypto::IV_LEN;
use crate::errors::{PwVaultError, Result};

// ---------------------------------------------------------------------------
// Record-set encoding
// ---------------------------------------------------------------------------

/// Encode the ordered record list as JSON.
pub fn serialize_records(records: &[Record]) -> Result<Vec<u8>> {
    serde_json::to_vec(records)
        .map_err(|e| PwVaultError::MalformedVault(format!("cannot encode records: {e}")))
}

/// Decode a JSON record list produced by `serialize_records`.
pub fn deserialize_records(bytes: &[u8]) -> Result<Vec<Record>> {
    serde_json::from_slice(bytes)
        .map_err(|e| PwVaultError::MalformedVault(format!("records JSON: {e}")))
}

// ---------------------------------------------------------------------------
// VaultFile
// ---------------------------------------------------------------------------

/// The two fields stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
    pub ciphertext: Vec<u8>,
    pub iv: [u8; IV_LEN],
}

/// Render a vault file as its two-line text form (with trailing newline).
pub fn encode_vault_file(file: &VaultFile) -> String {
    format!(
        "{}\n{}\n",
        BASE64.encode(&file.ciphertext),
        BASE64.encode(file.iv)
    )
}

/// Parse the two-line text form.
///
/// Trailing empty lines and `\r\n` endings are tolerated; anything else
/// that is not exactly two base64 lines is rejected.
pub fn decode_vault_file(text: &str) -> Result<VaultFile> {
    let mut lines = text.lines().map(str::trim_end);

    let ct_line = lines
        .next()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| PwVaultError::MalformedVault("missing ciphertext line".into()))?;
    let iv_line = lines
        .next()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| PwVaultError::MalformedVault("missing IV line".into()))?;

    if lines.any(|l| !l.is_empty()) {
        return Err(PwVaultError::MalformedVault(
            "unexpected data after IV line".into(),
        ));
    }

    let ciphertext = BASE64
        .decode(ct_line)
        .map_err(|e| PwVaultError::MalformedVault(format!("ciphertext base64: {e}")))?;
    let iv_bytes = BASE64
        .decode(iv_line)
        .map_err(|e| PwVaultError::MalformedVault(format!("IV base64: {e}")))?;

    let iv: [u8; IV_LEN] = iv_bytes.as_slice().try_into().map_err(|_| {
        PwVaultError::MalformedVault(format!(
            "IV must be {IV_LEN} bytes, got {}",
            iv_bytes.len()
        ))
    })?;

    Ok(VaultFile { ciphertext, iv })
}

// ---------------------------------------------------------------------------
// Disk I/O
// ---------------------------------------------------------------------------

/// Read and parse a vault file from disk.
pub fn read_vault_file(path: &Path) -> Result<VaultFile> {
    let raw = fs::read(path)?;
    parse_vault_bytes(&raw)
}

/// Parse raw file bytes, rejecting anything that is not UTF-8 text.
pub fn parse_vault_bytes(raw: &[u8]) -> Result<VaultFile> {
    let text = std::str::from_utf8(raw)
        .map_err(|_| PwVaultError::MalformedVault("vault file is not text".into()))?;
    decode_vault_file(text)
}

/// Write a vault file, fully replacing any previous contents.
///
/// Writes to a temp file in the same directory, then renames it over the
/// target so an interrupted write leaves the old vault intact.  I/O
/// failures are reported as `Persist`.
pub fn write_vault_file(path: &Path, file: &VaultFile) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(PwVaultError::Persist)?;

    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    let written = write_private(&tmp_path, encode_vault_file(file).as_bytes())
        .and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(PwVaultError::Persist(e));
    }

    debug!(path = %path.display(), bytes = file.ciphertext.len(), "vault file written");
    Ok(())
}

/// Write `data` to a new file at `path`, readable by the owner only (on Unix).
///
/// A leftover file from an interrupted write is removed first; the file is
/// always freshly created with the owner-only mode.
fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed stale temp file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut f = options.open(path)?;
    f.write_all(data)?;
    f.sync_all()
}
