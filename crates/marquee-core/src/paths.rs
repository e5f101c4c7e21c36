//! Common filesystem paths used by marquee.

use std::path::PathBuf;

/// Base directory for marquee state (config, storage, logs).
///
/// Defaults to `~/.config/marquee`, but can be overridden via `MARQUEE_DIR`
/// for testing or multi-profile setups.
pub fn marquee_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MARQUEE_DIR") {
        return PathBuf::from(dir);
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".config").join("marquee")
}

/// Path to the marquee configuration file.
pub fn config_path() -> PathBuf {
    marquee_dir().join("config.toml")
}

/// Path to the default key-value storage file.
pub fn storage_path() -> PathBuf {
    marquee_dir().join("storage.json")
}

/// Path to the TUI log file.
pub fn tui_log_path() -> PathBuf {
    marquee_dir().join("marquee-tui.log")
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
