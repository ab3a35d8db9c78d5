//! Editor preference management.

use clap::{Args, Subcommand};
use specedit_config::{Preferences, validate_band_smoothing, validate_dynamic_range};
use std::path::Path;

use super::common::{load_prefs, save_prefs};

#[derive(Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    command: PrefsCommand,
}

#[derive(Subcommand)]
enum PrefsCommand {
    /// Print the current preferences as TOML
    Show,

    /// Change one or more preferences
    Set {
        /// Display dynamic range (dB, > 0)
        #[arg(long)]
        dynamic_range: Option<f64>,

        /// Band filter edge smoothing (Hz, >= 0)
        #[arg(long)]
        smoothing: Option<f64>,
    },

    /// Restore the defaults
    Reset,

    /// Print the preferences file path
    Path,
}

pub fn run(args: PrefsArgs, prefs_path: &Path) -> anyhow::Result<()> {
    match args.command {
        PrefsCommand::Show => {
            let prefs = load_prefs(prefs_path)?;
            print!("{}", prefs.to_toml()?);
        }

        PrefsCommand::Set {
            dynamic_range,
            smoothing,
        } => {
            if dynamic_range.is_none() && smoothing.is_none() {
                anyhow::bail!("Nothing to set: pass --dynamic-range and/or --smoothing");
            }

            let mut prefs = load_prefs(prefs_path)?;
            if let Some(value) = dynamic_range {
                prefs.spectrum_editor.dynamic_range_db = validate_dynamic_range(value)?;
            }
            if let Some(value) = smoothing {
                prefs.spectrum_editor.band_smoothing_hz = validate_band_smoothing(value)?;
            }
            save_prefs(prefs_path, &prefs)?;
            tracing::info!(path = %prefs_path.display(), "saved preferences");
            print!("{}", prefs.to_toml()?);
        }

        PrefsCommand::Reset => {
            let prefs = Preferences::default();
            save_prefs(prefs_path, &prefs)?;
            println!("Reset preferences in {}", prefs_path.display());
        }

        PrefsCommand::Path => {
            println!("{}", prefs_path.display());
        }
    }

    Ok(())
}
