//! Spectral peak listing.

use clap::Args;
use specedit_core::{FrequencyInterval, Peak, local_peaks};
use std::path::{Path, PathBuf};

use super::common::{load_prefs, load_spectrum, open_session};

/// List spectral peaks.
#[derive(Args)]
pub struct PeaksArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report only the peak nearest this frequency (Hz)
    #[arg(long, value_name = "HZ")]
    pub near: Option<f64>,

    /// Show the N loudest peaks
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run the peaks command.
pub fn run(args: PeaksArgs, prefs_path: &Path) -> anyhow::Result<()> {
    let (spectrum, _) = load_spectrum(&args.input)?;

    let peaks = match args.near {
        Some(frequency) => {
            let prefs = load_prefs(prefs_path)?.spectrum_editor;
            let mut session = open_session(spectrum, prefs)?;
            session.set_selection(FrequencyInterval::point(frequency));
            vec![session.on_move_cursor_to_peak()?]
        }
        None => {
            let mut peaks = local_peaks(&spectrum);
            peaks.sort_by(|a, b| b.amplitude_db.total_cmp(&a.amplitude_db));
            peaks.truncate(args.top);
            peaks
        }
    };

    if args.json {
        let rows: Vec<_> = peaks.iter().map(peak_json).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("  {:>12}  {:>10}  {:>6}", "Freq (Hz)", "Level (dB)", "Bin");
    println!("  {:>12}  {:>10}  {:>6}", "---------", "----------", "---");
    for peak in &peaks {
        println!(
            "  {:>12.2}  {:>10.2}  {:>6}",
            peak.frequency, peak.amplitude_db, peak.bin
        );
    }

    Ok(())
}

fn peak_json(peak: &Peak) -> serde_json::Value {
    serde_json::json!({
        "frequency_hz": peak.frequency,
        "amplitude_db": peak.amplitude_db,
        "bin": peak.bin,
    })
}
