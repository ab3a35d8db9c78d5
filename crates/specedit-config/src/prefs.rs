//! Preference file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::validate_prefs;

/// Default dynamic range of the spectrum display in dB.
pub const DEFAULT_DYNAMIC_RANGE_DB: f64 = 60.0;

/// Default Hann band smoothing width in Hz.
pub const DEFAULT_BAND_SMOOTHING_HZ: f64 = 100.0;

/// Spectrum editor preferences.
///
/// A session receives a copy at construction and reports changes back
/// through its setters; writing them to disk is the caller's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorPrefs {
    /// Span of the display below the loudest bin, in dB.
    pub dynamic_range_db: f64,

    /// Width of the Hann ramps used by the pass/stop band filters, in Hz.
    pub band_smoothing_hz: f64,
}

impl Default for EditorPrefs {
    fn default() -> Self {
        Self {
            dynamic_range_db: DEFAULT_DYNAMIC_RANGE_DB,
            band_smoothing_hz: DEFAULT_BAND_SMOOTHING_HZ,
        }
    }
}

impl EditorPrefs {
    /// Set the dynamic range.
    pub fn with_dynamic_range(mut self, dynamic_range_db: f64) -> Self {
        self.dynamic_range_db = dynamic_range_db;
        self
    }

    /// Set the band smoothing width.
    pub fn with_band_smoothing(mut self, band_smoothing_hz: f64) -> Self {
        self.band_smoothing_hz = band_smoothing_hz;
        self
    }
}

/// Preferences file.
///
/// # TOML Format
///
/// ```toml
/// [spectrum_editor]
/// dynamic_range_db = 60.0
/// band_smoothing_hz = 100.0
/// ```
///
/// Missing sections and keys take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Spectrum editor section.
    pub spectrum_editor: EditorPrefs,
}

impl Preferences {
    /// Load preferences from a TOML file and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load preferences, returning defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate preferences from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let prefs: Preferences = toml::from_str(toml_str)?;
        validate_prefs(&prefs.spectrum_editor)?;
        Ok(prefs)
    }

    /// Save the preferences to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::create_dir(parent, e))?;
            }
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preferences to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
