//! Preferences for the specedit spectrum editor.
//!
//! The editor remembers two values between sessions: the display's dynamic
//! range and the smoothing width of the Hann band filters. This crate
//! defines them, validates them, and stores them as TOML in the platform
//! config directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use specedit_config::{Preferences, load_user_prefs, save_user_prefs};
//!
//! let mut prefs = load_user_prefs().unwrap();
//! prefs.spectrum_editor.dynamic_range_db = 80.0;
//! save_user_prefs(&prefs).unwrap();
//! ```

mod error;
mod prefs;

/// Platform-specific paths for the preferences file.
pub mod paths;

/// Preference value validation.
pub mod validation;

pub use error::ConfigError;
pub use paths::{
    ensure_user_config_dir, load_user_prefs, save_user_prefs, user_config_dir, user_prefs_path,
};
pub use prefs::{DEFAULT_BAND_SMOOTHING_HZ, DEFAULT_DYNAMIC_RANGE_DB, EditorPrefs, Preferences};
pub use validation::{
    BAND_SMOOTHING_PARAM, DYNAMIC_RANGE_PARAM, ValidationError, ValidationResult,
    validate_band_smoothing, validate_dynamic_range, validate_prefs,
};
