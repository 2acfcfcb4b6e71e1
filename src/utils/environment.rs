use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const FACTORY_DIR_NAME: &str = ".factory";
const SESSIONS_DIR_NAME: &str = "sessions";

/// Get the Factory directory path (~/.factory)
pub fn get_factory_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to resolve home directory")?;
    Ok(home.join(FACTORY_DIR_NAME))
}

/// Get the default Droid sessions directory (~/.factory/sessions), whether or not it exists
pub fn default_sessions_dir() -> Result<PathBuf> {
    Ok(get_factory_dir()?.join(SESSIONS_DIR_NAME))
}

/// Sessions directory for a given home directory
pub fn sessions_dir_under(home: &Path) -> PathBuf {
    home.join(FACTORY_DIR_NAME).join(SESSIONS_DIR_NAME)
}

/// Locate the Droid sessions directory
///
/// Uses `override_dir` when given, otherwise `~/.factory/sessions`. Returns
/// `Ok(None)` when the directory does not exist; only a home directory that
/// cannot be resolved is an error.
pub fn find_sessions_dir(override_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_sessions_dir()?,
    };

    if dir.is_dir() { Ok(Some(dir)) } else { Ok(None) }
}
