//! Session Token Persistence
//!
//! The staff credential survives between CLI invocations in a session
//! file: written at login, read at startup, deleted at logout.

use crate::error::CliResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default session file location.
///
/// `$REWARDS_SESSION_FILE` overrides via the CLI flag; otherwise the
/// token lives under the home directory, falling back to the working
/// directory when no home is set.
pub fn default_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".rewards").join("session"),
        None => PathBuf::from(".rewards-session"),
    }
}

/// Load a persisted token, if one exists.
pub fn load(path: &Path) -> CliResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let token = contents.trim().to_string();
            Ok(if token.is_empty() { None } else { Some(token) })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Persist a token, creating the parent directory if needed.
pub fn save(path: &Path, token: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, token)?;
    debug!(path = %path.display(), "session token stored");
    Ok(())
}

/// Delete the persisted token. Missing file is not an error.
pub fn clear(path: &Path) -> CliResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
