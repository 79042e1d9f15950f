//! CLI module: Clap argument parser, prompts, output helpers, and the menu loop.

pub mod clipboard;
pub mod generator;
pub mod output;
pub mod prompt;
pub mod repl;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Settings;
use crate::errors::{PwVaultError, Result};
use crate::vault::VaultStore;

use self::prompt::{Prompt, TerminalPrompt};
use self::repl::Repl;

/// pwvault: encrypted password vault for the terminal.
#[derive(Parser)]
#[command(
    name = "pwvault",
    about = "Encrypted password vault for the terminal",
    version
)]
pub struct Cli {
    /// Vault file (default: ~/.pwvault)
    #[arg(long, env = "PWVAULT_FILE")]
    pub vault: Option<PathBuf>,

    /// Config file (default: ~/.pwvault.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// The user's home directory from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            PwVaultError::ConfigError("HOME is not set — pass --vault <PATH>".into())
        })
}

/// Load settings and resolve the vault path.
///
/// Precedence for the path: `--vault` / `PWVAULT_FILE`, then the
/// `vault_file` setting, then `~/.pwvault`.
pub fn resolve(cli: &Cli) -> Result<(Settings, PathBuf)> {
    let settings = match (&cli.config, home_dir()) {
        (Some(path), _) => Settings::load(path)?,
        (None, Ok(home)) => Settings::load(&home.join(Settings::FILE_NAME))?,
        (None, Err(_)) => Settings::default(),
    };

    let path = match &cli.vault {
        Some(path) => path.clone(),
        None => settings.vault_path(&home_dir()?),
    };

    Ok((settings, path))
}

/// Ask for the master passphrase and unlock (or create) the vault.
pub fn unlock<P: Prompt>(path: &Path, settings: &Settings, prompt: &mut P) -> Result<VaultStore> {
    if !path.exists() {
        output::info(&format!(
            "No vault at {} — a new one will be created.",
            path.display()
        ));
    }

    let passphrase = prompt.prompt_passphrase("Master password")?;
    VaultStore::unlock(path, &passphrase, &settings.kdf_params(), || {
        prompt.confirm_passphrase("Confirm master password")
    })
}

/// Launcher entry: resolve paths, unlock, then run the menu loop.
///
/// Unlock errors are returned to the caller, which exits the process.
pub fn run(cli: &Cli) -> Result<()> {
    let (settings, path) = resolve(cli)?;
    let mut prompt = TerminalPrompt::stdin();

    let store = unlock(&path, &settings, &mut prompt)?;
    output::success(&format!(
        "Vault unlocked ({} record(s))",
        store.record_count()
    ));

    Repl::new(store, &mut prompt, settings.password_length).run()
}
