//! Specedit CLI - headless front end for the spectrum band editor.

mod commands;
mod svg;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "specedit")]
#[command(author, version, about = "Specedit spectrum band editor CLI", long_about = None)]
struct Cli {
    /// Preferences file to use instead of the one in the user config directory
    #[arg(long, global = true, value_name = "PATH")]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show WAV metadata and a summary of its spectrum
    Info(commands::info::InfoArgs),

    /// Dump the spectrum of a WAV file as CSV
    Spectrum(commands::spectrum::SpectrumArgs),

    /// List spectral peaks, or find the one nearest a frequency
    Peaks(commands::peaks::PeaksArgs),

    /// Apply a Hann pass or stop band and write the result
    Filter(commands::filter::FilterArgs),

    /// Publish a frequency band as a sound and/or a spectrum
    Band(commands::band::BandArgs),

    /// Render the spectrum editor view to SVG
    Plot(commands::plot::PlotArgs),

    /// Show or change editor preferences
    Prefs(commands::prefs::PrefsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let prefs = commands::common::prefs_path(cli.prefs);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, &prefs),
        Commands::Spectrum(args) => commands::spectrum::run(args),
        Commands::Peaks(args) => commands::peaks::run(args, &prefs),
        Commands::Filter(args) => commands::filter::run(args, &prefs),
        Commands::Band(args) => commands::band::run(args, &prefs),
        Commands::Plot(args) => commands::plot::run(args, &prefs),
        Commands::Prefs(args) => commands::prefs::run(args, &prefs),
    }
}
