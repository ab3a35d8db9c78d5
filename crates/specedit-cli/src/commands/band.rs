//! Band publishing.

use clap::Args;
use specedit_io::write_wav;
use specedit_session::Publication;
use std::path::{Path, PathBuf};

use super::common::{band, load_prefs, load_spectrum, open_session, spectrum_csv};

/// Extract a frequency band without modifying the source.
#[derive(Args)]
pub struct BandArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Lower band edge (Hz)
    #[arg(long)]
    pub low: f64,

    /// Upper band edge (Hz, default: Nyquist)
    #[arg(long)]
    pub high: Option<f64>,

    /// Write the band-filtered sound to this WAV file
    #[arg(long, value_name = "WAV")]
    pub sound: Option<PathBuf>,

    /// Write the band's spectrum to this CSV file
    #[arg(long, value_name = "CSV")]
    pub spectrum: Option<PathBuf>,

    /// Output bit depth (default: same as input)
    #[arg(long)]
    pub bits: Option<u16>,
}

/// Run the band command.
pub fn run(args: BandArgs, prefs_path: &Path) -> anyhow::Result<()> {
    if args.sound.is_none() && args.spectrum.is_none() {
        anyhow::bail!("Nothing to publish: pass --sound and/or --spectrum");
    }

    let prefs = load_prefs(prefs_path)?.spectrum_editor;
    let (spectrum, spec) = load_spectrum(&args.input)?;
    let interval = band(&spectrum, args.low, args.high);

    let mut session = open_session(spectrum, prefs)?;
    session.set_selection(interval);
    if !session.can_publish() {
        anyhow::bail!(
            "Band {:.1}-{:.1} Hz contains no frequency bins",
            interval.low,
            interval.high
        );
    }

    if args.spectrum.is_some() {
        session.publish_band()?;
    }
    if args.sound.is_some() {
        session.publish_sound()?;
    }

    for publication in session.host_mut().take_publications() {
        match publication {
            Publication::Band(published) => {
                let Some(path) = &args.spectrum else { continue };
                std::fs::write(path, spectrum_csv(&published, interval))?;
                println!(
                    "Published band spectrum ({} bins) -> {}",
                    published.window_bin_count(interval),
                    path.display()
                );
            }
            Publication::Sound(sound) => {
                let Some(path) = &args.sound else { continue };
                write_wav(path, &sound, args.bits.unwrap_or(spec.bits_per_sample))?;
                println!(
                    "Published band-filtered sound ({:.3}s) -> {}",
                    sound.duration_secs(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}
