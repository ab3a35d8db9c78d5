//! Specedit Core - frequency-domain band editing primitives
//!
//! This crate holds the data model and the numerical routines behind the
//! spectrum editor:
//!
//! - [`array`] - [`FrequencyArray`] and [`FrequencyInterval`], with
//!   frequency-to-bin conversion
//! - [`band`] - [`isolate_band`] and the Hann-tapered pass/stop filters
//! - [`power`] - per-bin power spectral density in dB
//! - [`range`] - [`DisplayRange`] and the dB ↔ screen-height mapping
//! - [`peak`] - local maxima and [`nearest_peak`]
//! - [`synth`] - [`Sound`] ↔ spectrum transforms (rustfft)
//!
//! # Example
//!
//! ```rust
//! use specedit_core::{FrequencyArray, FrequencyInterval, compute_default_range, isolate_band};
//!
//! let array = FrequencyArray::new(0.0, 100.0, vec![1e-3; 10], vec![0.0; 10]).unwrap();
//! let band = isolate_band(&array, FrequencyInterval::new(250.0, 550.0));
//! assert_eq!(band.real()[4], 1e-3);
//!
//! let range = compute_default_range(&array, 60.0);
//! assert!((range.span() - 60.0).abs() < 1e-9);
//! ```
//!
//! # Tracing
//!
//! Enable the `tracing` feature to get `debug!` events from the band,
//! range, peak, and synthesis routines.

pub mod array;
pub mod band;
pub mod error;
pub mod peak;
pub mod power;
pub mod range;
pub mod synth;

pub use array::{FrequencyArray, FrequencyInterval};
pub use band::{HannBand, apply_hann_band, isolate_band, pass_hann_band, stop_hann_band};
pub use error::SpectrumError;
pub use peak::{Peak, local_peaks, nearest_peak};
pub use power::{
    AUDITORY_THRESHOLD_POWER, power_density, power_density_curve, power_density_db,
    power_density_range, power_to_db,
};
pub use range::{
    DisplayRange, FALLBACK_MAXIMUM_DB, FALLBACK_MINIMUM_DB, compute_default_range,
    cursor_visible, db_to_normalized, map_click_to_db,
};
pub use synth::{Sound, band_to_sound, sound_to_spectrum, spectrum_to_sound};
