//! Local maxima of the power spectrum.
//!
//! Peaks are interior bins whose power density (dB) is strictly above the
//! left neighbour and at least the right one. Each peak's frequency and
//! height are refined with a parabola through the three surrounding points.

use crate::array::FrequencyArray;
use crate::error::SpectrumError;
use crate::power::power_density_curve;

/// A local maximum of the power spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Interpolated frequency in Hz.
    pub frequency: f64,
    /// Interpolated power density in dB.
    pub amplitude_db: f64,
    /// Bin holding the discrete maximum.
    pub bin: usize,
}

/// All local maxima in ascending frequency order.
pub fn local_peaks(array: &FrequencyArray) -> Vec<Peak> {
    let n = array.bin_count();
    if n < 3 {
        return Vec::new();
    }
    let db = power_density_curve(array, 0..n);

    (1..n - 1)
        .filter(|&i| db[i] > db[i - 1] && db[i] >= db[i + 1])
        .map(|i| refine(array, &db, i))
        .collect()
}

/// The local maximum closest in frequency to `query`.
///
/// Equidistant peaks resolve to the lower frequency.
pub fn nearest_peak(array: &FrequencyArray, query: f64) -> Result<Peak, SpectrumError> {
    let peak = local_peaks(array)
        .into_iter()
        .min_by(|a, b| {
            let da = (a.frequency - query).abs();
            let db = (b.frequency - query).abs();
            da.total_cmp(&db)
                .then_with(|| a.frequency.total_cmp(&b.frequency))
        })
        .ok_or(SpectrumError::NoPeakFound { frequency: query })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(query, frequency = peak.frequency, amplitude_db = peak.amplitude_db, "nearest_peak");

    Ok(peak)
}

fn refine(array: &FrequencyArray, db: &[f64], i: usize) -> Peak {
    let (left, centre, right) = (db[i - 1], db[i], db[i + 1]);
    let curvature = left - 2.0 * centre + right;

    // Silent neighbours (-inf dB) or a flat top leave nothing to fit.
    let (offset, amplitude_db) = if left.is_finite() && right.is_finite() && curvature < 0.0 {
        let offset = (0.5 * (left - right) / curvature).clamp(-0.5, 0.5);
        (offset, centre - 0.25 * (left - right) * offset)
    } else {
        (0.0, centre)
    };

    Peak {
        frequency: array.frequency_of(i) + offset * array.bin_spacing(),
        amplitude_db,
        bin: i,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_magnitudes(spacing: f64, magnitudes: &[f64]) -> FrequencyArray {
        FrequencyArray::new(0.0, spacing, magnitudes.to_vec(), vec![0.0; magnitudes.len()])
            .unwrap()
    }

    #[test]
    fn symmetric_peak_is_exact() {
        let array = from_magnitudes(100.0, &[0.1, 0.5, 1.0, 0.5, 0.1]);
        let peaks = local_peaks(&array);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].bin, 2);
        assert!((peaks[0].frequency - 200.0).abs() < 1e-9);
    }

    #[test]
    fn asymmetric_peak_leans_toward_louder_side() {
        let array = from_magnitudes(100.0, &[0.1, 0.8, 1.0, 0.2, 0.1]);
        let peak = nearest_peak(&array, 200.0).unwrap();
        assert!(peak.frequency < 200.0 && peak.frequency > 150.0, "{peak:?}");
        assert!(peak.amplitude_db >= crate::power::power_density_db(&array, 2));
    }

    #[test]
    fn edges_are_not_peaks() {
        let array = from_magnitudes(10.0, &[5.0, 1.0, 0.5, 1.0, 5.0]);
        assert!(local_peaks(&array).is_empty());
        assert!(matches!(
            nearest_peak(&array, 20.0),
            Err(SpectrumError::NoPeakFound { .. })
        ));
    }

    #[test]
    fn too_few_bins_has_no_peak() {
        let array = from_magnitudes(10.0, &[1.0, 2.0]);
        assert!(nearest_peak(&array, 0.0).is_err());
    }

    #[test]
    fn equidistant_peaks_prefer_lower_frequency() {
        let mut magnitudes = vec![0.01; 11];
        magnitudes[4] = 1.0;
        magnitudes[6] = 1.0;
        let array = from_magnitudes(100.0, &magnitudes);
        let peak = nearest_peak(&array, 500.0).unwrap();
        assert_eq!(peak.bin, 4);
    }

    #[test]
    fn silent_neighbours_skip_interpolation() {
        let array = from_magnitudes(50.0, &[0.0, 1.0, 0.0]);
        let peak = nearest_peak(&array, 0.0).unwrap();
        assert_eq!(peak.frequency, 50.0);
        assert!(peak.amplitude_db.is_finite());
    }
}
