use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::{KdfParams, DEFAULT_ITERATIONS};
use crate::errors::{PwVaultError, Result};

/// User-level configuration, loaded from `~/.pwvault.toml`.
///
/// Every field has a sensible default so pwvault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file location.  Defaults to `~/.pwvault`.
    #[serde(default)]
    pub vault_file: Option<String>,

    /// SHA-256 rounds for key derivation (default: 1 000 000).
    ///
    /// Not stored in the vault: a vault opens only with the count it
    /// was written under.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Length of generated passwords (default: 20).
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_password_length() -> usize {
    20
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: None,
            kdf_iterations: default_kdf_iterations(),
            password_length: default_password_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the home directory.
    pub const FILE_NAME: &'static str = ".pwvault.toml";

    /// Name of the default vault file in the home directory.
    pub const VAULT_FILE_NAME: &'static str = ".pwvault";

    /// Load settings from `config_path`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PwVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the vault file path.
    ///
    /// An explicit `vault_file` wins; a relative one is taken from `home`.
    /// Otherwise the vault lives at `home/.pwvault`.
    pub fn vault_path(&self, home: &Path) -> PathBuf {
        match &self.vault_file {
            Some(file) => home.join(file),
            None => home.join(Self::VAULT_FILE_NAME),
        }
    }

    /// Convert the KDF settings into crypto-layer params.
    pub fn kdf_params(&self) -> KdfParams {
        KdfParams {
            iterations: self.kdf_iterations,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
