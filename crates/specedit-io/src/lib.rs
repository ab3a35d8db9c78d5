//! Audio file I/O for the specedit spectrum editor.
//!
//! Loads WAV files as mono [`Sound`](specedit_core::Sound)s (multi-channel
//! files are mixed down) and writes synthesized sounds back out.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use specedit_core::{sound_to_spectrum, spectrum_to_sound};
//! use specedit_io::{read_wav, write_wav};
//!
//! let (sound, spec) = read_wav("input.wav")?;
//! let spectrum = sound_to_spectrum(&sound)?;
//! // ... edit the spectrum ...
//! write_wav("output.wav", &spectrum_to_sound(&spectrum)?, spec.bits_per_sample)?;
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file holds no samples.
    #[error("WAV file contains no samples")]
    EmptyFile,

    /// The bit depth cannot be written.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
