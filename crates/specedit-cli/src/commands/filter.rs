//! Hann band filtering.

use clap::{Args, ValueEnum};
use specedit_core::{HannBand, spectrum_to_sound};
use specedit_io::write_wav;
use std::path::{Path, PathBuf};

use super::common::{band, load_prefs, load_spectrum, open_session, save_prefs};

/// Which side of the band to keep.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    /// Keep the band
    Pass,
    /// Remove the band
    Stop,
}

impl From<Mode> for HannBand {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pass => HannBand::Pass,
            Mode::Stop => HannBand::Stop,
        }
    }
}

/// Apply a Hann pass or stop band to a WAV file.
#[derive(Args)]
pub struct FilterArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Pass or stop the band
    #[arg(long, value_enum, default_value = "pass")]
    pub mode: Mode,

    /// Lower band edge (Hz)
    #[arg(long)]
    pub low: f64,

    /// Upper band edge (Hz, default: Nyquist)
    #[arg(long)]
    pub high: Option<f64>,

    /// Edge smoothing width (Hz, default: from preferences)
    #[arg(long)]
    pub smoothing: Option<f64>,

    /// Output bit depth (default: same as input)
    #[arg(long)]
    pub bits: Option<u16>,

    /// Remember the smoothing width for later runs
    #[arg(long)]
    pub remember: bool,
}

/// Run the filter command.
pub fn run(args: FilterArgs, prefs_path: &Path) -> anyhow::Result<()> {
    let mut preferences = load_prefs(prefs_path)?;
    let (spectrum, spec) = load_spectrum(&args.input)?;

    let interval = band(&spectrum, args.low, args.high);
    let smoothing = args
        .smoothing
        .unwrap_or(preferences.spectrum_editor.band_smoothing_hz);

    let mut session = open_session(spectrum, preferences.spectrum_editor)?;
    session.set_selection(interval);
    session.on_filter_command(args.mode.into(), smoothing)?;

    let sound = spectrum_to_sound(session.array())?;
    write_wav(&args.output, &sound, args.bits.unwrap_or(spec.bits_per_sample))?;

    println!(
        "{} band {:.1}-{:.1} Hz (smoothing {:.1} Hz) -> {}",
        match args.mode {
            Mode::Pass => "Passed",
            Mode::Stop => "Stopped",
        },
        interval.low,
        interval.high,
        smoothing,
        args.output.display()
    );

    if args.remember {
        preferences.spectrum_editor = session.prefs();
        save_prefs(prefs_path, &preferences)?;
        println!("Saved band smoothing to {}", prefs_path.display());
    }

    Ok(())
}
