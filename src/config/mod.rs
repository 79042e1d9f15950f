//! Configuration loaded from `~/.pwvault.toml`.

pub mod settings;

pub use settings::Settings;
