//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`.  `RUST_LOG` wins when set;
//! otherwise the level follows the number of `-v` flags.  Nothing logged
//! anywhere in the crate carries passphrases, keys, or passwords.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a level: none = warn, one = info, more = debug.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber.  Calling it twice is a no-op.
pub fn init(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
