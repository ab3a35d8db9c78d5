//! Conversion between sounds and spectra.
//!
//! Spectra are scaled as continuous-time Fourier transforms: the forward
//! transform multiplies the DFT by the sampling period, the inverse
//! multiplies the inverse DFT by the bin spacing. With that scaling
//! [`sound_to_spectrum`] followed by [`spectrum_to_sound`] reproduces the
//! original samples.
//!
//! A spectrum of `n` bins came from either `2n - 2` samples (even length,
//! last bin at Nyquist) or `2n - 1` samples (odd length). Odd length is
//! inferred when the last bin has an imaginary part or sits noticeably
//! below the domain's upper edge.

use std::sync::Arc;

use rustfft::{FftPlanner, num_complex::Complex};

use crate::array::{FrequencyArray, FrequencyInterval};
use crate::band::isolate_band;
use crate::error::SpectrumError;

/// Mono time-domain signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    /// Samples, nominally in `[-1, 1]`.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: f64,
}

impl Sound {
    /// Create a sound.
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Largest absolute sample value.
    pub fn peak_amplitude(&self) -> f64 {
        self.samples.iter().fold(0.0, |acc, &s| acc.max(s.abs()))
    }
}

fn plan(size: usize, inverse: bool) -> Arc<dyn rustfft::Fft<f64>> {
    let mut planner = FftPlanner::new();
    if inverse {
        planner.plan_fft_inverse(size)
    } else {
        planner.plan_fft_forward(size)
    }
}

/// Spectrum of a sound, from 0 Hz to Nyquist.
pub fn sound_to_spectrum(sound: &Sound) -> Result<FrequencyArray, SpectrumError> {
    if sound.is_empty() {
        return Err(SpectrumError::EmptySound);
    }
    if !(sound.sample_rate.is_finite() && sound.sample_rate > 0.0) {
        return Err(SpectrumError::InvalidSampleRate(sound.sample_rate));
    }

    let n = sound.len();
    let mut buffer: Vec<Complex<f64>> = sound
        .samples
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect();
    plan(n, false).process(&mut buffer);

    let scaling = 1.0 / sound.sample_rate;
    let bin_count = n / 2 + 1;
    let (real, mut imaginary): (Vec<f64>, Vec<f64>) = buffer[..bin_count]
        .iter()
        .map(|c| (c.re * scaling, c.im * scaling))
        .unzip();

    // DC and (for even lengths) Nyquist are real for real input; rounding
    // noise there would make the length ambiguous on the way back.
    imaginary[0] = 0.0;
    if n % 2 == 0 {
        imaginary[bin_count - 1] = 0.0;
    }

    let array = FrequencyArray::new(0.0, sound.sample_rate / n as f64, real, imaginary)?
        .with_max_frequency(0.5 * sound.sample_rate);

    #[cfg(feature = "tracing")]
    tracing::debug!(samples = n, bins = array.bin_count(), "sound_to_spectrum");

    Ok(array)
}

/// Sound whose spectrum is `array`.
///
/// Requires the first bin to sit at 0 Hz.
pub fn spectrum_to_sound(array: &FrequencyArray) -> Result<Sound, SpectrumError> {
    let spacing = array.bin_spacing();
    if array.first_bin_frequency().abs() > 1e-9 * spacing {
        return Err(SpectrumError::NotInvertible {
            first_bin_frequency: array.first_bin_frequency(),
        });
    }

    let bins = array.bin_count();
    let re = array.real();
    let im = array.imaginary();
    let odd = im[bins - 1] != 0.0
        || array.max_frequency() - array.last_bin_frequency() > 0.25 * spacing;
    let n = (2 * bins).saturating_sub(if odd { 1 } else { 2 }).max(1);

    let mut buffer = vec![Complex::new(0.0, 0.0); n];
    buffer[0] = Complex::new(re[0], 0.0);
    for k in 1..bins {
        if 2 * k == n {
            // Nyquist bin of an even-length sound is purely real.
            buffer[k] = Complex::new(re[k], 0.0);
        } else {
            let z = Complex::new(re[k], im[k]);
            buffer[k] = z;
            buffer[n - k] = z.conj();
        }
    }
    plan(n, true).process(&mut buffer);

    let sound = Sound::new(
        buffer.iter().map(|c| c.re * spacing).collect(),
        n as f64 * spacing,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(bins, samples = n, sample_rate = sound.sample_rate, "spectrum_to_sound");

    Ok(sound)
}

/// Sound containing only the bins inside `band`.
pub fn band_to_sound(array: &FrequencyArray, band: FrequencyInterval) -> Result<Sound, SpectrumError> {
    spectrum_to_sound(&isolate_band(array, band))
}
