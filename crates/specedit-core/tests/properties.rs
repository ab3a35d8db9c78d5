//! Property-based tests for specedit-core band editing and range mapping.
//!
//! Tests band isolation, Hann-band complementarity, and the dB display
//! mapping using proptest for randomized spectra and intervals.

use proptest::prelude::*;
use specedit_core::{
    DisplayRange, FrequencyArray, FrequencyInterval, compute_default_range, db_to_normalized,
    isolate_band, map_click_to_db, pass_hann_band, stop_hann_band,
};

/// A random spectrum on a grid starting at `first` with `spacing` Hz bins.
fn spectrum_strategy() -> impl Strategy<Value = FrequencyArray> {
    (
        prop::collection::vec((-1.0f64..=1.0f64, -1.0f64..=1.0f64), 1..=128),
        -500.0f64..500.0f64,
        0.5f64..200.0f64,
    )
        .prop_map(|(bins, first, spacing)| {
            let (real, imaginary) = bins.into_iter().unzip();
            FrequencyArray::new(first, spacing, real, imaginary).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bins inside `[low, high]` are unchanged, all others are exactly zero,
    /// and the source array is not modified.
    #[test]
    fn isolate_band_keeps_inside_zeroes_outside(
        array in spectrum_strategy(),
        a in -2000.0f64..30000.0f64,
        b in -2000.0f64..30000.0f64,
    ) {
        let band = FrequencyInterval::new(a.min(b), a.max(b));
        let before = array.clone();
        let isolated = isolate_band(&array, band);

        prop_assert_eq!(&array, &before);
        for i in 0..array.bin_count() {
            let f = array.frequency_of(i);
            if band.contains(f) {
                prop_assert_eq!(isolated.bin(i), array.bin(i), "bin {} at {} Hz changed", i, f);
            } else {
                prop_assert_eq!(isolated.bin(i), Some((0.0, 0.0)), "bin {} at {} Hz not zeroed", i, f);
            }
        }
    }

    /// Isolating the same band twice equals isolating it once.
    #[test]
    fn isolate_band_is_idempotent(
        array in spectrum_strategy(),
        a in -2000.0f64..30000.0f64,
        b in -2000.0f64..30000.0f64,
    ) {
        let band = FrequencyInterval::new(a.min(b), a.max(b));
        let once = isolate_band(&array, band);
        let twice = isolate_band(&once, band);
        prop_assert_eq!(once, twice);
    }

    /// `low_index_for(low) <= high_index_for(high)` whenever the interval
    /// meets the array's span.
    #[test]
    fn index_conversion_is_consistent(
        array in spectrum_strategy(),
        a in -2000.0f64..30000.0f64,
        b in -2000.0f64..30000.0f64,
    ) {
        let (low, high) = (a.min(b), a.max(b));
        let range = array.bins_within(FrequencyInterval::new(low, high));
        if !range.is_empty() {
            prop_assert!(array.low_index_for(low) <= array.high_index_for(high));
            prop_assert_eq!(range.start, array.low_index_for(low));
            prop_assert_eq!(range.end - 1, array.high_index_for(high));
        }
    }

    /// Pass and stop Hann bands with the same parameters sum to the input.
    #[test]
    fn hann_pass_and_stop_sum_to_input(
        array in spectrum_strategy(),
        a in -2000.0f64..30000.0f64,
        width in 1.0f64..10000.0f64,
        smoothing in 0.0f64..500.0f64,
    ) {
        let band = FrequencyInterval::new(a, a + width);
        let mut passed = array.clone();
        pass_hann_band(&mut passed, band, smoothing);
        let mut stopped = array.clone();
        stop_hann_band(&mut stopped, band, smoothing);

        // Narrow bands let both edge tapers overlap; complementarity only
        // holds when the ramps are disjoint.
        prop_assume!(width > 2.0 * smoothing);
        for i in 0..array.bin_count() {
            let re = passed.real()[i] + stopped.real()[i];
            let im = passed.imaginary()[i] + stopped.imaginary()[i];
            prop_assert!((re - array.real()[i]).abs() < 1e-9);
            prop_assert!((im - array.imaginary()[i]).abs() < 1e-9);
        }
    }

    /// Click-to-dB and dB-to-height are inverse mappings.
    #[test]
    fn click_mapping_roundtrip(
        maximum in -200.0f64..200.0f64,
        dynamic_range in 1.0f64..200.0f64,
        y in 0.0f64..=1.0f64,
    ) {
        let range = DisplayRange::from_maximum(maximum, dynamic_range);
        let db = map_click_to_db(y, &range);
        prop_assert!((db_to_normalized(db, &range) - y).abs() < 1e-9);
    }

    /// Data-derived windows always span exactly the dynamic range.
    #[test]
    fn default_range_spans_dynamic_range(
        array in spectrum_strategy(),
        dynamic_range in 1.0f64..200.0f64,
    ) {
        let range = compute_default_range(&array, dynamic_range);
        if range.maximum_db != 1000.0 {
            prop_assert!((range.span() - dynamic_range).abs() < 1e-9);
        } else {
            prop_assert_eq!(range.minimum_db, -1000.0);
        }
    }
}
