//! Display WAV metadata and a spectrum summary.

use clap::Args;
use specedit_core::local_peaks;
use specedit_io::{WavFormat, read_wav_info};
use std::path::{Path, PathBuf};

use super::common::{format_db, load_prefs, load_spectrum, open_session};

/// Display WAV file and spectrum information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs, prefs_path: &Path) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;
    let prefs = load_prefs(prefs_path)?.spectrum_editor;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );

    let (spectrum, _) = load_spectrum(&args.file)?;
    let peak_count = local_peaks(&spectrum).len();
    let session = open_session(spectrum, prefs)?;
    let spectrum = session.array();
    let range = session.display_range();

    println!();
    println!("Bins:        {}", spectrum.bin_count());
    println!("Spacing:     {:.4} Hz", spectrum.bin_spacing());
    println!(
        "Domain:      {:.1} - {:.1} Hz",
        spectrum.min_frequency(),
        spectrum.max_frequency()
    );
    println!(
        "Display:     {} to {} ({} dynamic range)",
        format_db(range.minimum_db),
        format_db(range.maximum_db),
        format_db(range.dynamic_range_db)
    );
    println!("Peaks:       {peak_count}");

    Ok(())
}
