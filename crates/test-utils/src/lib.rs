//! Shared test utilities for nexr crates.
//!
//! This crate provides common test fixtures and utilities used across
//! multiple crates in the nexr workspace.

use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = nexr_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Standard test fixture with a throwaway profile state directory.
///
/// Holds the tempdir and provides access to common paths.
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct ProfileFixture {
    pub tempdir: tempfile::TempDir,
    /// Path used as the nexr state directory in the temp environment
    pub state_dir: PathBuf,
}

impl ProfileFixture {
    /// Create a new fixture with an empty state directory.
    ///
    /// Does NOT set NEXR_STATE_DIR - use `state_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let state_dir = tempdir.path().join(".nexr");
        std::fs::create_dir_all(&state_dir)?;
        Ok(Self { tempdir, state_dir })
    }

    /// Get the path that should be set as NEXR_STATE_DIR.
    pub fn state_path(&self) -> &std::path::Path {
        &self.state_dir
    }

    /// Create an RAII guard that points NEXR_STATE_DIR at this fixture.
    pub fn state_guard(&self) -> EnvVarGuard {
        set_env_var("NEXR_STATE_DIR", Some(self.state_dir.to_str().unwrap()))
    }

    /// Write a skills file holding the given skill names.
    ///
    /// Returns the path to the written file.
    pub fn write_skills(&self, names: &[&str]) -> std::io::Result<PathBuf> {
        let body = names
            .iter()
            .map(|name| format!("{name:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        let path = self.state_dir.join("skills.json");
        std::fs::write(&path, format!("[{body}]"))?;
        Ok(path)
    }

    /// Write an evidence corpus file from (kind, title, detail) triples.
    ///
    /// Returns the path to the written file.
    pub fn write_corpus(&self, records: &[(&str, &str, &str)]) -> std::io::Result<PathBuf> {
        let body = records
            .iter()
            .map(|(kind, title, detail)| {
                format!("{{\"kind\": {kind:?}, \"title\": {title:?}, \"detail\": {detail:?}}}")
            })
            .collect::<Vec<_>>()
            .join(", ");
        let path = self.tempdir.path().join("corpus.json");
        std::fs::write(&path, format!("{{\"records\": [{body}]}}"))?;
        Ok(path)
    }
}
