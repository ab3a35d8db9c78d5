//! Spectrum CSV export.

use clap::Args;
use specedit_core::FrequencyInterval;
use std::path::PathBuf;

use super::common::{load_spectrum, spectrum_csv};

/// Dump the spectrum of a WAV file.
#[derive(Args)]
pub struct SpectrumArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lowest frequency to include (Hz)
    #[arg(long, default_value = "0")]
    pub low: f64,

    /// Highest frequency to include (Hz, default: Nyquist)
    #[arg(long)]
    pub high: Option<f64>,
}

/// Run the spectrum command.
pub fn run(args: SpectrumArgs) -> anyhow::Result<()> {
    let (spectrum, _) = load_spectrum(&args.input)?;
    let window = FrequencyInterval::new(
        args.low,
        args.high.unwrap_or_else(|| spectrum.max_frequency()),
    );

    let csv = spectrum_csv(&spectrum, window);

    match args.output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            println!(
                "Wrote {} bins to {}",
                spectrum.window_bin_count(window),
                path.display()
            );
        }
        None => print!("{csv}"),
    }

    Ok(())
}
