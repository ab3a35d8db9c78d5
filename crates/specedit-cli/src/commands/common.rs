//! Shared CLI helpers used across multiple commands.

use specedit_config::{EditorPrefs, Preferences, user_prefs_path};
use specedit_core::{FrequencyArray, FrequencyInterval, power_density_db, sound_to_spectrum};
use specedit_io::{WavSpec, read_wav};
use specedit_session::{EditSession, RecordingHost};
use std::path::{Path, PathBuf};

/// The preferences file: the `--prefs` override or the user's file.
pub fn prefs_path(override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(user_prefs_path)
}

/// Load preferences, falling back to defaults when the file is missing.
pub fn load_prefs(path: &Path) -> anyhow::Result<Preferences> {
    Preferences::load_or_default(path)
        .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
}

/// Write preferences, creating the directory if needed.
pub fn save_prefs(path: &Path, prefs: &Preferences) -> anyhow::Result<()> {
    prefs
        .save(path)
        .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
}

/// Read a WAV file and transform it to a spectrum.
pub fn load_spectrum(path: &Path) -> anyhow::Result<(FrequencyArray, WavSpec)> {
    let (sound, spec) = read_wav(path)?;
    let spectrum = sound_to_spectrum(&sound)?;
    tracing::debug!(
        path = %path.display(),
        bins = spectrum.bin_count(),
        spacing = spectrum.bin_spacing(),
        "loaded spectrum"
    );
    Ok((spectrum, spec))
}

/// Open a headless edit session on `array`.
pub fn open_session(
    array: FrequencyArray,
    prefs: EditorPrefs,
) -> anyhow::Result<EditSession<RecordingHost>> {
    Ok(EditSession::new(array, prefs, RecordingHost::new())?)
}

/// Interval from command-line edges; a missing upper edge means the top
/// of the domain.
pub fn band(array: &FrequencyArray, low: f64, high: Option<f64>) -> FrequencyInterval {
    FrequencyInterval::new(low, high.unwrap_or_else(|| array.max_frequency()))
}

/// Format a dB value the way the editor labels its axis.
pub fn format_db(db: f64) -> String {
    format!("{db:.1} dB")
}

/// CSV rows for the bins inside `window`.
pub fn spectrum_csv(array: &FrequencyArray, window: FrequencyInterval) -> String {
    let mut csv = String::from("frequency_hz,real,imaginary,power_db\n");
    for i in array.bins_within(window) {
        let (re, im) = array.bin(i).unwrap_or_default();
        csv.push_str(&format!(
            "{:.4},{:.6e},{:.6e},{:.2}\n",
            array.frequency_of(i),
            re,
            im,
            power_density_db(array, i)
        ));
    }
    csv
}
