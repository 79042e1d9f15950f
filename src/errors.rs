use thiserror::Error;

/// All errors that can occur in pwvault.
#[derive(Debug, Error)]
pub enum PwVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — bad key, IV, or padding")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Malformed vault: {0}")]
    MalformedVault(String),

    #[error("Unable to unlock vault — wrong password or corrupted file")]
    WrongPasswordOrCorrupt,

    #[error("Passwords do not match")]
    ConfirmationMismatch,

    #[error("Current master password is incorrect")]
    WrongCurrentPassword,

    #[error("A record for '{username}' at '{site}' already exists")]
    DuplicateRecord { site: String, username: String },

    #[error("Record {0} not found")]
    RecordNotFound(String),

    #[error("Failed to save vault: {0}")]
    Persist(#[source] std::io::Error),

    // --- Config errors ---
    #[error("Config error: {0}")]
    ConfigError(String),

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for pwvault results.
pub type Result<T> = std::result::Result<T, PwVaultError>;
