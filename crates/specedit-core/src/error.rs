//! Error types for spectrum construction and analysis.

use thiserror::Error;

/// Errors raised by [`FrequencyArray`](crate::FrequencyArray) construction
/// and by the analysis routines that operate on it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpectrumError {
    /// A spectrum must carry at least one bin.
    #[error("a spectrum needs at least one frequency bin")]
    EmptyArray,

    /// Real and imaginary parts disagree in length.
    #[error("real part has {real} bins but imaginary part has {imaginary}")]
    LengthMismatch {
        /// Number of real components supplied.
        real: usize,
        /// Number of imaginary components supplied.
        imaginary: usize,
    },

    /// Bin spacing must be positive and finite.
    #[error("bin spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    /// First bin frequency must be finite.
    #[error("first bin frequency must be finite, got {0}")]
    InvalidFirstFrequency(f64),

    /// No local maximum exists in the power spectrum.
    #[error("no peak found near {frequency} Hz")]
    NoPeakFound {
        /// Frequency the search was centred on.
        frequency: f64,
    },

    /// The spectrum does not start at 0 Hz, so it has no time-domain counterpart.
    #[error("cannot synthesize a sound from a spectrum whose first bin is at {first_bin_frequency} Hz")]
    NotInvertible {
        /// Frequency of the first bin.
        first_bin_frequency: f64,
    },

    /// A sound with no samples cannot be transformed.
    #[error("cannot compute the spectrum of an empty sound")]
    EmptySound,

    /// Sample rate must be positive and finite.
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),
}
