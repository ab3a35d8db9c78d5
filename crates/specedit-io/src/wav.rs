//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use specedit_core::Sound;
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64;
    let num_frames = total_samples / spec.channels as u64;
    let duration_secs = num_frames as f64 / spec.sample_rate as f64;

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavSpec {
    /// Number of audio channels in the source file.
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (e.g., 16, 24, 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

/// Read a WAV file as a mono sound along with the file's spec.
///
/// Multi-channel files are mixed down to mono by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Sound, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f64> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    if samples.is_empty() {
        return Err(Error::EmptyFile);
    }

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f64>() / channels as f64)
            .collect()
    } else {
        samples
    };

    tracing::debug!(
        path = %path.display(),
        frames = mono.len(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        "read wav"
    );

    Ok((Sound::new(mono, spec.sample_rate as f64), spec))
}

/// Write a sound to a mono WAV file.
///
/// 32-bit output is IEEE float; 8, 16, and 24-bit output is PCM with
/// clipping at full scale. The sample rate is rounded to the nearest Hz.
pub fn write_wav<P: AsRef<Path>>(path: P, sound: &Sound, bits_per_sample: u16) -> Result<()> {
    let sample_format = match bits_per_sample {
        32 => SampleFormat::Float,
        8 | 16 | 24 => SampleFormat::Int,
        other => return Err(Error::UnsupportedBitDepth(other)),
    };
    let hound_spec = hound::WavSpec {
        channels: 1,
        sample_rate: sound.sample_rate.round() as u32,
        bits_per_sample,
        sample_format,
    };

    let path = path.as_ref();
    let mut writer = WavWriter::create(path, hound_spec)?;

    if bits_per_sample == 32 {
        for &sample in &sound.samples {
            writer.write_sample(sample as f32)?;
        }
    } else {
        let max_val = (1i64 << (bits_per_sample - 1)) as f64;
        for &sample in &sound.samples {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    tracing::debug!(path = %path.display(), samples = sound.len(), "wrote wav");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_roundtrip_f32() {
        let sound = Sound::new((0..1000).map(|i| (i as f64 / 1000.0).sin()).collect(), 48000.0);

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &sound, 32).unwrap();

        let (loaded, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec.sample_rate, 48000);
        assert_eq!(loaded.len(), sound.len());
        for (a, b) in sound.samples.iter().zip(&loaded.samples) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_roundtrip_i16() {
        let sound = Sound::new(
            (0..1000).map(|i| (i as f64 / 1000.0).sin() * 0.9).collect(),
            44100.0,
        );

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &sound, 16).unwrap();

        let (loaded, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        for (a, b) in sound.samples.iter().zip(&loaded.samples) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn test_stereo_is_mixed_down() {
        let file = NamedTempFile::new().unwrap();
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(file.path(), spec).unwrap();
        for (l, r) in [(1.0f32, 0.0f32), (0.5, 0.5), (-1.0, 0.0)] {
            writer.write_sample(l).unwrap();
            writer.write_sample(r).unwrap();
        }
        writer.finalize().unwrap();

        let (sound, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec.channels, 2);
        assert_eq!(sound.samples, vec![0.5, 0.5, -0.5]);
    }

    #[test]
    fn test_info_reports_duration() {
        let sound = Sound::new(vec![0.0; 4410], 44100.0);
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &sound, 24).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.num_frames, 4410);
        assert_eq!(info.format, WavFormat::Pcm);
        assert!((info.duration_secs - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_file_is_error() {
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &Sound::new(Vec::new(), 8000.0), 16).unwrap();
        assert!(matches!(read_wav(file.path()), Err(Error::EmptyFile)));
    }

    #[test]
    fn test_unsupported_bit_depth() {
        let file = NamedTempFile::new().unwrap();
        let err = write_wav(file.path(), &Sound::new(vec![0.0], 8000.0), 12).unwrap_err();
        assert!(matches!(err, Error::UnsupportedBitDepth(12)));
    }
}
