//! Preference value validation.
//!
//! The editor forms accept a dynamic range that must be strictly positive
//! and a band smoothing width that may be zero (a rectangular band) but not
//! negative. Both must be finite.
//!
//! # Example
//!
//! ```rust
//! use specedit_config::{validate_band_smoothing, validate_dynamic_range};
//!
//! assert!(validate_dynamic_range(60.0).is_ok());
//! assert!(validate_dynamic_range(0.0).is_err());
//! assert!(validate_band_smoothing(0.0).is_ok());
//! ```

use thiserror::Error;

use crate::prefs::EditorPrefs;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("parameter '{param}' must be positive, got {value}")]
    NotPositive {
        /// Name of the parameter.
        param: String,
        /// The rejected value.
        value: f64,
    },

    /// Value must not be negative.
    #[error("parameter '{param}' must not be negative, got {value}")]
    Negative {
        /// Name of the parameter.
        param: String,
        /// The rejected value.
        value: f64,
    },

    /// Value must be a finite number.
    #[error("parameter '{param}' must be a finite number, got {value}")]
    NotFinite {
        /// Name of the parameter.
        param: String,
        /// The rejected value.
        value: f64,
    },
}

impl ValidationError {
    /// Name of the offending parameter.
    pub fn param(&self) -> &str {
        match self {
            ValidationError::NotPositive { param, .. }
            | ValidationError::Negative { param, .. }
            | ValidationError::NotFinite { param, .. } => param,
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match self {
            ValidationError::NotPositive { value, .. }
            | ValidationError::Negative { value, .. }
            | ValidationError::NotFinite { value, .. } => *value,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parameter name of the dynamic range preference.
pub const DYNAMIC_RANGE_PARAM: &str = "dynamic_range_db";

/// Parameter name of the band smoothing preference.
pub const BAND_SMOOTHING_PARAM: &str = "band_smoothing_hz";

fn finite(param: &str, value: f64) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite {
            param: param.to_string(),
            value,
        })
    }
}

/// Dynamic range in dB: finite and strictly positive.
pub fn validate_dynamic_range(value: f64) -> ValidationResult<f64> {
    let value = finite(DYNAMIC_RANGE_PARAM, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive {
            param: DYNAMIC_RANGE_PARAM.to_string(),
            value,
        })
    }
}

/// Band smoothing in Hz: finite and not negative.
pub fn validate_band_smoothing(value: f64) -> ValidationResult<f64> {
    let value = finite(BAND_SMOOTHING_PARAM, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::Negative {
            param: BAND_SMOOTHING_PARAM.to_string(),
            value,
        })
    }
}

/// Validate every field of an [`EditorPrefs`].
pub fn validate_prefs(prefs: &EditorPrefs) -> ValidationResult<()> {
    validate_dynamic_range(prefs.dynamic_range_db)?;
    validate_band_smoothing(prefs.band_smoothing_hz)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_range_must_be_positive() {
        assert_eq!(validate_dynamic_range(40.0), Ok(40.0));
        let err = validate_dynamic_range(0.0).unwrap_err();
        assert_eq!(err.param(), DYNAMIC_RANGE_PARAM);
        assert_eq!(err.value(), 0.0);
        assert!(matches!(
            validate_dynamic_range(-10.0),
            Err(ValidationError::NotPositive { .. })
        ));
    }

    #[test]
    fn smoothing_may_be_zero() {
        assert_eq!(validate_band_smoothing(0.0), Ok(0.0));
        assert!(matches!(
            validate_band_smoothing(-1.0),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(
            validate_dynamic_range(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            validate_band_smoothing(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn default_prefs_are_valid() {
        assert!(validate_prefs(&EditorPrefs::default()).is_ok());
    }

    #[test]
    fn display_names_the_parameter() {
        let err = validate_band_smoothing(-5.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter 'band_smoothing_hz' must not be negative, got -5"
        );
    }
}
