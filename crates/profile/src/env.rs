use std::path::PathBuf;

use anyhow::Result;

/// Environment variable overriding where profile state is stored.
pub const STATE_DIR_ENV: &str = "NEXR_STATE_DIR";

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Directory holding persisted profile state.
///
/// `NEXR_STATE_DIR` takes precedence; otherwise `~/.nexr` is used.
pub fn state_dir() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var(STATE_DIR_ENV) {
        return Ok(PathBuf::from(custom));
    }
    Ok(home_dir()?.join(".nexr"))
}
