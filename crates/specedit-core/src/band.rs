//! Band isolation and Hann-tapered band filters.
//!
//! Two flavours of band editing:
//!
//! - [`isolate_band`] copies the array and zeroes every bin outside a closed
//!   interval. Abrupt, but cheap; used when publishing a band.
//! - [`pass_hann_band`] / [`stop_hann_band`] edit in place and weight the
//!   bins near each edge with a raised-cosine ramp `smoothing` Hz wide on
//!   either side of the edge.
//!
//! The pass and stop filters are complementary: for the same band and
//! smoothing, their outputs sum to the input bin by bin.
//!
//! # Example
//!
//! ```rust
//! use specedit_core::{FrequencyArray, FrequencyInterval, isolate_band};
//!
//! let array = FrequencyArray::new(0.0, 100.0, vec![1.0; 10], vec![0.5; 10]).unwrap();
//! let band = isolate_band(&array, FrequencyInterval::new(250.0, 550.0));
//! assert_eq!(band.real()[2], 0.0);
//! assert_eq!(band.real()[3], 1.0);
//! ```

use std::f64::consts::PI;

use crate::array::{FrequencyArray, FrequencyInterval};

/// Which side of a Hann band survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HannBand {
    /// Keep the band, suppress everything else.
    Pass,
    /// Suppress the band, keep everything else.
    Stop,
}

impl HannBand {
    /// Undo-journal label for this edit.
    pub fn label(self) -> &'static str {
        match self {
            HannBand::Pass => "Pass band",
            HannBand::Stop => "Stop band",
        }
    }

    /// Filter name for user-facing messages.
    pub fn filter_name(self) -> &'static str {
        match self {
            HannBand::Pass => "band-pass",
            HannBand::Stop => "band-stop",
        }
    }
}

/// Return a copy of `array` with every bin outside `band` set to zero.
///
/// Bins exactly on either edge are kept. The input is not modified, and
/// applying the function twice gives the same result as applying it once.
pub fn isolate_band(array: &FrequencyArray, band: FrequencyInterval) -> FrequencyArray {
    let keep = array.bins_within(band);
    let mut isolated = array.clone();
    for index in (0..isolated.bin_count()).filter(|i| !keep.contains(i)) {
        isolated.zero_bin(index);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        low = band.low,
        high = band.high,
        kept = keep.len(),
        "isolate_band"
    );

    isolated
}

/// Edge geometry shared by the pass and stop filters.
struct HannEdges {
    f1: f64,
    f2: f64,
    f3: f64,
    f4: f64,
    half_pi_by_smoothing: f64,
    taper_low: bool,
    taper_high: bool,
}

impl HannEdges {
    fn new(array: &FrequencyArray, band: FrequencyInterval, smoothing: f64) -> Self {
        let low = band.low;
        // An upper edge of 0 Hz means "up to the top of the domain".
        let high = if band.high == 0.0 {
            array.max_frequency()
        } else {
            band.high
        };
        Self {
            f1: low - smoothing,
            f2: low + smoothing,
            f3: high - smoothing,
            f4: high + smoothing,
            half_pi_by_smoothing: if smoothing != 0.0 {
                PI / (2.0 * smoothing)
            } else {
                0.0
            },
            taper_low: low > array.min_frequency(),
            taper_high: high < array.max_frequency(),
        }
    }

    /// Rises from 0 at `f1` to 1 at `f2`.
    fn rising(&self, frequency: f64) -> f64 {
        0.5 - 0.5 * (self.half_pi_by_smoothing * (frequency - self.f1)).cos()
    }

    /// Falls from 1 at `f3` to 0 at `f4`.
    fn falling(&self, frequency: f64) -> f64 {
        0.5 + 0.5 * (self.half_pi_by_smoothing * (frequency - self.f3)).cos()
    }
}

/// Keep `band`, with Hann-shaped edges `smoothing` Hz wide on each side.
///
/// Edges that coincide with the bottom or top of the frequency domain are
/// left untapered. A smoothing of zero gives a rectangular band with
/// inclusive edges.
pub fn pass_hann_band(array: &mut FrequencyArray, band: FrequencyInterval, smoothing: f64) {
    let edges = HannEdges::new(array, band, smoothing);

    for index in 0..array.bin_count() {
        let frequency = array.frequency_of(index);
        if frequency < edges.f1 || frequency > edges.f4 {
            array.zero_bin(index);
            continue;
        }
        if edges.taper_low && frequency < edges.f2 {
            array.scale_bin(index, edges.rising(frequency));
        }
        if edges.taper_high && frequency > edges.f3 {
            array.scale_bin(index, edges.falling(frequency));
        }
    }
}

/// Suppress `band`, with Hann-shaped edges `smoothing` Hz wide on each side.
///
/// This is the complement of [`pass_hann_band`].
pub fn stop_hann_band(array: &mut FrequencyArray, band: FrequencyInterval, smoothing: f64) {
    let edges = HannEdges::new(array, band, smoothing);
    if edges.f4 <= edges.f1 {
        return;
    }

    for index in 0..array.bin_count() {
        let frequency = array.frequency_of(index);
        if frequency < edges.f1 || frequency > edges.f4 {
            continue;
        }
        if edges.taper_low && frequency < edges.f2 {
            array.scale_bin(index, 1.0 - edges.rising(frequency));
        } else if edges.taper_high && frequency > edges.f3 {
            array.scale_bin(index, 1.0 - edges.falling(frequency));
        } else {
            array.zero_bin(index);
        }
    }
}

/// Apply a pass or stop Hann band in place.
pub fn apply_hann_band(
    array: &mut FrequencyArray,
    mode: HannBand,
    band: FrequencyInterval,
    smoothing: f64,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?mode, low = band.low, high = band.high, smoothing, "apply_hann_band");

    match mode {
        HannBand::Pass => pass_hann_band(array, band, smoothing),
        HannBand::Stop => stop_hann_band(array, band, smoothing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(bin_count: usize, spacing: f64) -> FrequencyArray {
        FrequencyArray::new(
            0.0,
            spacing,
            vec![1.0; bin_count],
            vec![-1.0; bin_count],
        )
        .unwrap()
    }

    #[test]
    fn isolate_band_leaves_input_untouched() {
        let array = ones(10, 100.0);
        let before = array.clone();
        let _ = isolate_band(&array, FrequencyInterval::new(250.0, 550.0));
        assert_eq!(array, before);
    }

    #[test]
    fn isolate_band_outside_array_zeroes_everything() {
        let array = ones(10, 100.0);
        let band = isolate_band(&array, FrequencyInterval::new(2000.0, 3000.0));
        assert!(band.real().iter().all(|&v| v == 0.0));
        assert!(band.imaginary().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn isolate_band_with_unbounded_low_edge() {
        let array = ones(10, 100.0);
        let band = isolate_band(&array, FrequencyInterval::new(-1e300, 500.0));
        assert!(band.real()[..6].iter().all(|&v| v == 1.0));
        assert!(band.real()[6..].iter().all(|&v| v == 0.0));
        assert!(band.imaginary()[6..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn pass_without_smoothing_is_rectangular() {
        let mut array = ones(10, 100.0);
        pass_hann_band(&mut array, FrequencyInterval::new(300.0, 500.0), 0.0);
        let expected = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(array.real(), &expected);
    }

    #[test]
    fn pass_edges_are_half_gain() {
        let mut array = ones(101, 10.0);
        pass_hann_band(&mut array, FrequencyInterval::new(300.0, 600.0), 50.0);

        let at = |f: f64| array.real()[(f / 10.0) as usize];
        assert_eq!(at(240.0), 0.0);
        assert_eq!(at(250.0), 0.0);
        assert!((at(300.0) - 0.5).abs() < 1e-12);
        assert!((at(350.0) - 1.0).abs() < 1e-12);
        assert_eq!(at(450.0), 1.0);
        assert!((at(550.0) - 1.0).abs() < 1e-12);
        assert!((at(600.0) - 0.5).abs() < 1e-12);
        assert!(at(650.0).abs() < 1e-12);
        assert_eq!(at(700.0), 0.0);
    }

    #[test]
    fn pass_does_not_taper_at_domain_edges() {
        let mut array = ones(11, 100.0);
        pass_hann_band(&mut array, FrequencyInterval::new(0.0, 1000.0), 150.0);
        assert!(array.real().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn zero_upper_edge_means_top_of_domain() {
        let mut array = ones(11, 100.0);
        pass_hann_band(&mut array, FrequencyInterval::new(500.0, 0.0), 0.0);
        assert_eq!(&array.real()[..5], &[0.0; 5]);
        assert_eq!(&array.real()[5..], &[1.0; 6]);
    }

    #[test]
    fn stop_zeroes_interior_and_keeps_outside() {
        let mut array = ones(101, 10.0);
        stop_hann_band(&mut array, FrequencyInterval::new(300.0, 600.0), 50.0);

        let at = |f: f64| array.real()[(f / 10.0) as usize];
        assert_eq!(at(200.0), 1.0);
        assert!((at(250.0) - 1.0).abs() < 1e-12);
        assert!((at(300.0) - 0.5).abs() < 1e-12);
        assert_eq!(at(450.0), 0.0);
        assert!((at(600.0) - 0.5).abs() < 1e-12);
        assert_eq!(at(800.0), 1.0);
    }

    #[test]
    fn pass_and_stop_are_complementary() {
        let source = FrequencyArray::new(
            0.0,
            7.0,
            (0..200).map(|i| (i as f64 * 0.37).sin()).collect(),
            (0..200).map(|i| (i as f64 * 0.11).cos()).collect(),
        )
        .unwrap();
        let band = FrequencyInterval::new(180.0, 900.0);

        let mut passed = source.clone();
        pass_hann_band(&mut passed, band, 60.0);
        let mut stopped = source.clone();
        stop_hann_band(&mut stopped, band, 60.0);

        for i in 0..source.bin_count() {
            let sum = passed.real()[i] + stopped.real()[i];
            assert!(
                (sum - source.real()[i]).abs() < 1e-12,
                "bin {i}: {sum} vs {}",
                source.real()[i]
            );
        }
    }

    #[test]
    fn labels() {
        assert_eq!(HannBand::Pass.label(), "Pass band");
        assert_eq!(HannBand::Stop.label(), "Stop band");
        assert_eq!(HannBand::Stop.filter_name(), "band-stop");
    }
}
