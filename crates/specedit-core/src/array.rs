//! Frequency-domain data model.
//!
//! A [`FrequencyArray`] holds one real and one imaginary component per bin,
//! sampled on a uniform frequency grid. Bin `i` (0-based) sits at
//! `first_bin_frequency + i * bin_spacing`.
//!
//! The index helpers follow sampled-data conventions:
//!
//! - [`FrequencyArray::low_index_for`] - first bin at or above a frequency
//! - [`FrequencyArray::high_index_for`] - last bin at or below a frequency
//! - [`FrequencyArray::bins_within`] - the bins inside a closed interval
//!
//! # Example
//!
//! ```rust
//! use specedit_core::{FrequencyArray, FrequencyInterval};
//!
//! let array = FrequencyArray::zeros(10, 0.0, 100.0).unwrap();
//! assert_eq!(array.bins_within(FrequencyInterval::new(250.0, 550.0)), 3..6);
//! ```

use std::ops::Range;

use crate::error::SpectrumError;

/// A closed frequency interval `[low, high]` in Hz.
///
/// Selections in the editor are intervals; an empty selection has
/// `low == high`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrequencyInterval {
    /// Lower edge in Hz.
    pub low: f64,
    /// Upper edge in Hz.
    pub high: f64,
}

impl FrequencyInterval {
    /// Create an interval. No ordering is enforced here.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A zero-width interval at `frequency`.
    pub const fn point(frequency: f64) -> Self {
        Self {
            low: frequency,
            high: frequency,
        }
    }

    /// True when both edges coincide.
    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }

    /// True when `low < high`, i.e. the interval selects a band.
    pub fn is_well_ordered(&self) -> bool {
        self.low < self.high
    }

    /// Centre of the interval.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Width in Hz (negative for inverted intervals).
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Inclusive membership test.
    pub fn contains(&self, frequency: f64) -> bool {
        self.low <= frequency && frequency <= self.high
    }
}

/// Complex spectrum sampled on a uniform frequency grid.
///
/// Invariants, enforced by the constructors:
///
/// - at least one bin
/// - `real.len() == imaginary.len()`
/// - `bin_spacing` positive and finite
/// - `max_frequency >= last_bin_frequency()`
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyArray {
    first_bin_frequency: f64,
    bin_spacing: f64,
    max_frequency: f64,
    real: Vec<f64>,
    imaginary: Vec<f64>,
}

impl FrequencyArray {
    /// Build an array from its components.
    ///
    /// The upper domain edge defaults to the last bin's frequency; use
    /// [`with_max_frequency`](Self::with_max_frequency) when the array came
    /// from a sound with an odd number of samples.
    pub fn new(
        first_bin_frequency: f64,
        bin_spacing: f64,
        real: Vec<f64>,
        imaginary: Vec<f64>,
    ) -> Result<Self, SpectrumError> {
        if real.len() != imaginary.len() {
            return Err(SpectrumError::LengthMismatch {
                real: real.len(),
                imaginary: imaginary.len(),
            });
        }
        if real.is_empty() {
            return Err(SpectrumError::EmptyArray);
        }
        if !(bin_spacing.is_finite() && bin_spacing > 0.0) {
            return Err(SpectrumError::InvalidSpacing(bin_spacing));
        }
        if !first_bin_frequency.is_finite() {
            return Err(SpectrumError::InvalidFirstFrequency(first_bin_frequency));
        }

        let last = first_bin_frequency + (real.len() - 1) as f64 * bin_spacing;
        Ok(Self {
            first_bin_frequency,
            bin_spacing,
            max_frequency: last,
            real,
            imaginary,
        })
    }

    /// An all-zero array with the given geometry.
    pub fn zeros(
        bin_count: usize,
        first_bin_frequency: f64,
        bin_spacing: f64,
    ) -> Result<Self, SpectrumError> {
        Self::new(
            first_bin_frequency,
            bin_spacing,
            vec![0.0; bin_count],
            vec![0.0; bin_count],
        )
    }

    /// Set the upper edge of the frequency domain.
    ///
    /// Values below the last bin's frequency are raised to it.
    pub fn with_max_frequency(mut self, max_frequency: f64) -> Self {
        if max_frequency.is_finite() {
            self.max_frequency = max_frequency.max(self.last_bin_frequency());
        }
        self
    }

    /// Number of bins.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.real.len()
    }

    /// Frequency of the first bin in Hz.
    #[inline]
    pub fn first_bin_frequency(&self) -> f64 {
        self.first_bin_frequency
    }

    /// Distance between adjacent bins in Hz.
    #[inline]
    pub fn bin_spacing(&self) -> f64 {
        self.bin_spacing
    }

    /// Lower edge of the frequency domain.
    #[inline]
    pub fn min_frequency(&self) -> f64 {
        self.first_bin_frequency
    }

    /// Upper edge of the frequency domain (Nyquist for arrays built from a sound).
    #[inline]
    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }

    /// Frequency of the last bin.
    pub fn last_bin_frequency(&self) -> f64 {
        self.frequency_of(self.bin_count() - 1)
    }

    /// The whole frequency domain `[min_frequency, max_frequency]`.
    pub fn domain(&self) -> FrequencyInterval {
        FrequencyInterval::new(self.min_frequency(), self.max_frequency)
    }

    /// Frequency of bin `index`.
    #[inline]
    pub fn frequency_of(&self, index: usize) -> f64 {
        self.first_bin_frequency + index as f64 * self.bin_spacing
    }

    /// Real components.
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Imaginary components.
    pub fn imaginary(&self) -> &[f64] {
        &self.imaginary
    }

    /// Both component slices for in-place editing. The length is fixed.
    pub fn components_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.real, &mut self.imaginary)
    }

    /// `(real, imaginary)` of bin `index`.
    pub fn bin(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.real.get(index)?, *self.imaginary.get(index)?))
    }

    /// Overwrite bin `index`. Out-of-range indices are ignored.
    pub fn set_bin(&mut self, index: usize, real: f64, imaginary: f64) {
        if index < self.bin_count() {
            self.real[index] = real;
            self.imaginary[index] = imaginary;
        }
    }

    /// Multiply both components of bin `index` by `factor`.
    #[inline]
    pub fn scale_bin(&mut self, index: usize, factor: f64) {
        self.real[index] *= factor;
        self.imaginary[index] *= factor;
    }

    /// Set both components of bin `index` to exactly zero.
    #[inline]
    pub fn zero_bin(&mut self, index: usize) {
        self.real[index] = 0.0;
        self.imaginary[index] = 0.0;
    }

    /// Smallest bin index whose frequency is `>= frequency`, clamped to the array.
    pub fn low_index_for(&self, frequency: f64) -> usize {
        self.clamp_index(self.raw_low_index(frequency))
    }

    /// Largest bin index whose frequency is `<= frequency`, clamped to the array.
    pub fn high_index_for(&self, frequency: f64) -> usize {
        self.clamp_index(self.raw_high_index(frequency))
    }

    /// Bins whose frequency lies inside the closed interval.
    ///
    /// Empty for inverted intervals and for intervals that miss the array.
    pub fn bins_within(&self, interval: FrequencyInterval) -> Range<usize> {
        if !(interval.low <= interval.high) {
            return 0..0;
        }
        let first = self.raw_low_index(interval.low).max(0);
        let last = self
            .raw_high_index(interval.high)
            .min(self.bin_count() as i64 - 1);
        if first > last {
            0..0
        } else {
            first as usize..(last + 1) as usize
        }
    }

    /// Number of bins inside the interval.
    pub fn window_bin_count(&self, interval: FrequencyInterval) -> usize {
        self.bins_within(interval).len()
    }

    fn position_of(&self, frequency: f64) -> f64 {
        (frequency - self.first_bin_frequency) / self.bin_spacing
    }

    fn frequency_at(&self, index: i64) -> f64 {
        self.first_bin_frequency + index as f64 * self.bin_spacing
    }

    // Position clamped to one step past either end, so the neighbour walk
    // starts in range for any input.
    fn start_position(&self, frequency: f64) -> f64 {
        self.position_of(frequency).clamp(-1.0, self.bin_count() as f64)
    }

    // Division can land a hair off an exact bin frequency; the neighbour
    // checks keep the index consistent with `frequency_of`.
    fn raw_low_index(&self, frequency: f64) -> i64 {
        let end = self.bin_count() as i64;
        let mut index = self.start_position(frequency).ceil() as i64;
        if !frequency.is_finite() {
            return index;
        }
        while index < end && self.frequency_at(index) < frequency {
            index += 1;
        }
        while index > 0 && self.frequency_at(index - 1) >= frequency {
            index -= 1;
        }
        index
    }

    fn raw_high_index(&self, frequency: f64) -> i64 {
        let end = self.bin_count() as i64;
        let mut index = self.start_position(frequency).floor() as i64;
        if !frequency.is_finite() {
            return index;
        }
        while index > -1 && self.frequency_at(index) > frequency {
            index -= 1;
        }
        while index < end - 1 && self.frequency_at(index + 1) <= frequency {
            index += 1;
        }
        index
    }

    fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.bin_count() as i64 - 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_bins() -> FrequencyArray {
        FrequencyArray::zeros(10, 0.0, 100.0).unwrap()
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let err = FrequencyArray::new(0.0, 1.0, vec![0.0; 3], vec![0.0; 2]).unwrap_err();
        assert_eq!(
            err,
            SpectrumError::LengthMismatch {
                real: 3,
                imaginary: 2
            }
        );
    }

    #[test]
    fn new_rejects_empty_and_bad_spacing() {
        assert_eq!(
            FrequencyArray::zeros(0, 0.0, 1.0).unwrap_err(),
            SpectrumError::EmptyArray
        );
        assert!(matches!(
            FrequencyArray::zeros(4, 0.0, 0.0),
            Err(SpectrumError::InvalidSpacing(_))
        ));
        assert!(matches!(
            FrequencyArray::zeros(4, 0.0, f64::NAN),
            Err(SpectrumError::InvalidSpacing(_))
        ));
    }

    #[test]
    fn frequency_of_follows_grid() {
        let array = FrequencyArray::zeros(5, 50.0, 25.0).unwrap();
        assert_eq!(array.frequency_of(0), 50.0);
        assert_eq!(array.frequency_of(4), 150.0);
        assert_eq!(array.last_bin_frequency(), 150.0);
        assert_eq!(array.max_frequency(), 150.0);
    }

    #[test]
    fn max_frequency_never_below_last_bin() {
        let array = ten_bins().with_max_frequency(100.0);
        assert_eq!(array.max_frequency(), 900.0);
        let array = ten_bins().with_max_frequency(950.0);
        assert_eq!(array.max_frequency(), 950.0);
    }

    #[test]
    fn low_and_high_index_on_and_between_bins() {
        let array = ten_bins();
        assert_eq!(array.low_index_for(300.0), 3);
        assert_eq!(array.high_index_for(300.0), 3);
        assert_eq!(array.low_index_for(250.0), 3);
        assert_eq!(array.high_index_for(250.0), 2);
    }

    #[test]
    fn indices_clamp_to_array() {
        let array = ten_bins();
        assert_eq!(array.low_index_for(-500.0), 0);
        assert_eq!(array.high_index_for(-500.0), 0);
        assert_eq!(array.low_index_for(5000.0), 9);
        assert_eq!(array.high_index_for(5000.0), 9);
        assert_eq!(array.low_index_for(f64::INFINITY), 9);
        assert_eq!(array.high_index_for(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn indices_clamp_extreme_frequencies() {
        let array = ten_bins();
        assert_eq!(array.low_index_for(-1e300), 0);
        assert_eq!(array.high_index_for(-1e300), 0);
        assert_eq!(array.low_index_for(1e300), 9);
        assert_eq!(array.high_index_for(1e300), 9);
        assert_eq!(array.low_index_for(f64::MAX), 9);
        assert_eq!(array.high_index_for(f64::MIN), 0);
    }

    #[test]
    fn bins_within_accepts_extreme_edges() {
        let array = ten_bins();
        assert_eq!(array.bins_within(FrequencyInterval::new(-1e300, 500.0)), 0..6);
        assert_eq!(array.bins_within(FrequencyInterval::new(450.0, 1e300)), 5..10);
        assert_eq!(array.bins_within(FrequencyInterval::new(-1e300, 1e300)), 0..10);
        assert!(array.bins_within(FrequencyInterval::new(1e299, 1e300)).is_empty());
        assert!(array.bins_within(FrequencyInterval::new(-1e300, -1e299)).is_empty());
    }

    #[test]
    fn bins_within_handles_misses_and_inversions() {
        let array = ten_bins();
        assert_eq!(array.bins_within(FrequencyInterval::new(250.0, 550.0)), 3..6);
        assert_eq!(array.bins_within(FrequencyInterval::new(-50.0, 50.0)), 0..1);
        assert!(array.bins_within(FrequencyInterval::new(910.0, 990.0)).is_empty());
        assert!(array.bins_within(FrequencyInterval::new(-90.0, -10.0)).is_empty());
        assert!(array.bins_within(FrequencyInterval::new(120.0, 180.0)).is_empty());
        assert!(array.bins_within(FrequencyInterval::new(550.0, 250.0)).is_empty());
    }

    #[test]
    fn bins_within_keeps_inexact_grid_edges() {
        // 0.1 * 3 is not exactly representable; the edge bin must still count.
        let array = FrequencyArray::zeros(10, 0.0, 0.1).unwrap();
        let edge = array.frequency_of(3);
        let range = array.bins_within(FrequencyInterval::new(edge, array.frequency_of(6)));
        assert_eq!(range, 3..7);
    }

    #[test]
    fn interval_helpers() {
        let band = FrequencyInterval::new(200.0, 400.0);
        assert!(band.is_well_ordered());
        assert!(!band.is_empty());
        assert_eq!(band.midpoint(), 300.0);
        assert_eq!(band.width(), 200.0);
        assert!(band.contains(200.0) && band.contains(400.0));
        assert!(!band.contains(401.0));

        let point = FrequencyInterval::point(300.0);
        assert!(point.is_empty());
        assert!(!point.is_well_ordered());
    }

    #[test]
    fn set_bin_ignores_out_of_range() {
        let mut array = ten_bins();
        array.set_bin(2, 1.0, -1.0);
        array.set_bin(99, 1.0, 1.0);
        assert_eq!(array.bin(2), Some((1.0, -1.0)));
        assert_eq!(array.bin(99), None);
    }
}
