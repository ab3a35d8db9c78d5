//! Platform-specific paths for the preferences file.
//!
//! - Linux: `~/.config/specedit/prefs.toml`
//! - macOS: `~/Library/Application Support/specedit/prefs.toml`
//! - Windows: `%APPDATA%\specedit\prefs.toml`

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::prefs::Preferences;

/// Application name used for directory paths.
const APP_NAME: &str = "specedit";

/// File name of the preferences file.
const PREFS_FILE: &str = "prefs.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user's preferences file.
pub fn user_prefs_path() -> PathBuf {
    user_config_dir().join(PREFS_FILE)
}

/// Ensure the user config directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
pub fn ensure_user_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// Load the user's preferences, or defaults if none were saved yet.
pub fn load_user_prefs() -> Result<Preferences, ConfigError> {
    Preferences::load_or_default(user_prefs_path())
}

/// Save preferences to the user's preferences file.
pub fn save_user_prefs(prefs: &Preferences) -> Result<PathBuf, ConfigError> {
    let path = ensure_user_config_dir()?.join(PREFS_FILE);
    prefs.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_config_dir() {
        let dir = user_config_dir();
        assert!(dir.to_string_lossy().contains("specedit"));
    }

    #[test]
    fn test_user_prefs_path() {
        let path = user_prefs_path();
        assert_eq!(path.file_name().unwrap(), "prefs.toml");
        assert!(path.starts_with(user_config_dir()));
    }
}
