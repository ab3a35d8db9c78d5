//! Power spectral density in decibels.
//!
//! Each bin's one-sided power density is `2 * (re² + im²)`, expressed in dB
//! relative to the auditory threshold (2·10⁻⁵ Pa squared, i.e. 4·10⁻¹⁰).

use std::ops::Range;

use crate::array::FrequencyArray;

/// Reference power for the dB scale (squared auditory threshold in Pa²).
pub const AUDITORY_THRESHOLD_POWER: f64 = 4.0e-10;

/// One-sided power density of a single bin.
#[inline]
pub fn power_density(real: f64, imaginary: f64) -> f64 {
    2.0 * (real * real + imaginary * imaginary)
}

/// Convert a power density to dB. Zero power maps to negative infinity.
#[inline]
pub fn power_to_db(power: f64) -> f64 {
    10.0 * (power / AUDITORY_THRESHOLD_POWER).log10()
}

/// Power density of bin `index` in dB.
pub fn power_density_db(array: &FrequencyArray, index: usize) -> f64 {
    power_to_db(power_density(array.real()[index], array.imaginary()[index]))
}

/// Power density in dB for each bin in `bins`.
pub fn power_density_curve(array: &FrequencyArray, bins: Range<usize>) -> Vec<f64> {
    bins.map(|i| power_density_db(array, i)).collect()
}

/// Minimum and maximum power density in dB across the array.
///
/// Returns `None` when every bin is silent. The minimum only considers
/// bins with non-zero power, so it is always finite.
pub fn power_density_range(array: &FrequencyArray) -> Option<(f64, f64)> {
    let (minimum, maximum) = array
        .real()
        .iter()
        .zip(array.imaginary())
        .map(|(&re, &im)| power_density(re, im))
        .filter(|&power| power > 0.0)
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), power| {
            (lo.min(power), hi.max(power))
        });

    if maximum == 0.0 || !maximum.is_finite() {
        return None;
    }
    Some((power_to_db(minimum), power_to_db(maximum)))
}
