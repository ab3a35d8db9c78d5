//! Error types for edit-session operations.

use specedit_config::ValidationError;
use specedit_core::SpectrumError;
use thiserror::Error;

use crate::host::{HostError, JournalError};

/// Errors returned by [`EditSession`](crate::EditSession) operations.
///
/// Every error is raised before the spectrum is touched: a failed operation
/// leaves the array, the selection, and the undo history as they were.
#[derive(Debug, Error)]
pub enum EditError {
    /// The selection is empty or inverted.
    #[error("To {operation}, first make a selection.")]
    InvalidSelection {
        /// What the user tried to do, e.g. `"apply a band-pass filter"`.
        operation: &'static str,
    },

    /// A numeric argument is out of range.
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The spectrum has no local maximum to move to.
    #[error("no peak found near {frequency} Hz")]
    NoPeakFound {
        /// Frequency the search was centred on.
        frequency: f64,
    },

    /// The undo journal refused the snapshot; nothing was changed.
    #[error("could not record undo step")]
    JournalFailure(#[source] JournalError),

    /// The undo history is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// The redo history is empty.
    #[error("nothing to redo")]
    NothingToRedo,

    /// A spectral primitive failed.
    #[error(transparent)]
    Spectrum(#[from] SpectrumError),

    /// The hosting framework failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl EditError {
    /// Create an [`InvalidParameter`](Self::InvalidParameter) error.
    pub fn invalid_parameter(name: impl Into<String>, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason,
        }
    }
}

impl From<ValidationError> for EditError {
    fn from(err: ValidationError) -> Self {
        let reason = match &err {
            ValidationError::NotPositive { .. } => "must be positive",
            ValidationError::Negative { .. } => "must not be negative",
            ValidationError::NotFinite { .. } => "must be a finite number",
        };
        Self::invalid_parameter(err.param(), err.value(), reason)
    }
}
