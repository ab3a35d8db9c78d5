//! Integration tests for specedit-core.
//!
//! Exercises the public API end to end on small synthetic spectra with
//! known structure: band isolation on a 100 Hz grid, peak location among
//! known maxima, default display ranges, and band-limited resynthesis.

use std::f64::consts::PI;

use specedit_core::{
    FrequencyArray, FrequencyInterval, HannBand, Sound, SpectrumError, apply_hann_band,
    band_to_sound, compute_default_range, db_to_normalized, isolate_band, local_peaks,
    map_click_to_db, nearest_peak, power_density_range, sound_to_spectrum,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Ten bins at 0, 100, ..., 900 Hz, each with a distinct non-zero value.
fn ten_bins() -> FrequencyArray {
    FrequencyArray::new(
        0.0,
        100.0,
        (1..=10).map(|i| i as f64).collect(),
        (1..=10).map(|i| -(i as f64) * 0.5).collect(),
    )
    .unwrap()
}

/// Spectrum on a 10 Hz grid with bumps centred at the given frequencies.
fn bumps_at(centres: &[f64]) -> FrequencyArray {
    let spacing = 10.0;
    let real = (0..=100)
        .map(|i| {
            let f = i as f64 * spacing;
            1e-4 + centres
                .iter()
                .map(|c| (-((f - c) / 30.0).powi(2)).exp())
                .sum::<f64>()
        })
        .collect::<Vec<_>>();
    let imaginary = vec![0.0; real.len()];
    FrequencyArray::new(0.0, spacing, real, imaginary).unwrap()
}

// ===========================================================================
// 1. Band isolation
// ===========================================================================

#[test]
fn isolate_band_on_hundred_hertz_grid() {
    let array = ten_bins();
    let band = isolate_band(&array, FrequencyInterval::new(250.0, 550.0));

    for i in 0..10 {
        let f = array.frequency_of(i);
        if [300.0, 400.0, 500.0].contains(&f) {
            assert_eq!(band.bin(i), array.bin(i), "{f} Hz should survive");
        } else {
            assert_eq!(band.bin(i), Some((0.0, 0.0)), "{f} Hz should be zeroed");
        }
    }
}

#[test]
fn isolate_band_keeps_bins_on_edges() {
    let array = ten_bins();
    let band = isolate_band(&array, FrequencyInterval::new(300.0, 500.0));
    assert_eq!(band.bin(3), array.bin(3));
    assert_eq!(band.bin(5), array.bin(5));
    assert_eq!(band.bin(2), Some((0.0, 0.0)));
    assert_eq!(band.bin(6), Some((0.0, 0.0)));
}

#[test]
fn hann_band_dispatch_matches_mode() {
    let array = ten_bins();
    let band = FrequencyInterval::new(300.0, 500.0);

    let mut passed = array.clone();
    apply_hann_band(&mut passed, HannBand::Pass, band, 0.0);
    assert_eq!(passed, isolate_band(&array, band));

    let mut stopped = array.clone();
    apply_hann_band(&mut stopped, HannBand::Stop, band, 0.0);
    assert_eq!(stopped.bin(4), Some((0.0, 0.0)));
    assert_eq!(stopped.bin(1), array.bin(1));
}

// ===========================================================================
// 2. Display range
// ===========================================================================

#[test]
fn default_range_follows_loudest_bin() {
    let array = ten_bins();
    let (_, loudest) = power_density_range(&array).unwrap();
    let range = compute_default_range(&array, 50.0);
    assert_eq!(range.maximum_db, loudest);
    assert!((range.maximum_db - range.minimum_db - 50.0).abs() < 1e-9);
}

#[test]
fn silent_spectrum_uses_fallback_window() {
    let array = FrequencyArray::zeros(32, 0.0, 10.0).unwrap();
    let range = compute_default_range(&array, 50.0);
    assert_eq!((range.minimum_db, range.maximum_db), (-1000.0, 1000.0));
}

#[test]
fn click_and_draw_mappings_are_inverse() {
    let range = compute_default_range(&ten_bins(), 70.0);
    for y in [0.0, 0.5, 1.0] {
        let db = map_click_to_db(y, &range);
        assert!((db_to_normalized(db, &range) - y).abs() < 1e-12, "y = {y}");
    }
}

// ===========================================================================
// 3. Peaks
// ===========================================================================

#[test]
fn nearest_peak_picks_closest_maximum() {
    let array = bumps_at(&[100.0, 500.0, 900.0]);
    let peaks = local_peaks(&array);
    assert_eq!(peaks.len(), 3, "{peaks:?}");

    let peak = nearest_peak(&array, 520.0).unwrap();
    assert!((peak.frequency - 500.0).abs() < 1e-6, "{peak:?}");
}

#[test]
fn nearest_peak_on_flat_spectrum_fails() {
    let array = FrequencyArray::new(0.0, 10.0, vec![1.0; 16], vec![0.0; 16]).unwrap();
    assert_eq!(
        nearest_peak(&array, 50.0),
        Err(SpectrumError::NoPeakFound { frequency: 50.0 })
    );
}

// ===========================================================================
// 4. Resynthesis
// ===========================================================================

#[test]
fn band_limited_sound_keeps_only_selected_tone() {
    let sample_rate = 16000.0;
    let len = 1600;
    let sound = Sound::new(
        (0..len)
            .map(|i| {
                let t = i as f64 / sample_rate;
                0.5 * (2.0 * PI * 300.0 * t).sin() + 0.25 * (2.0 * PI * 3000.0 * t).sin()
            })
            .collect(),
        sample_rate,
    );
    let spectrum = sound_to_spectrum(&sound).unwrap();
    let high = band_to_sound(&spectrum, FrequencyInterval::new(2000.0, 4000.0)).unwrap();

    assert_eq!(high.len(), len);
    assert!((high.peak_amplitude() - 0.25).abs() < 1e-6);
}
