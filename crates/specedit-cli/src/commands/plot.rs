//! Render the spectrum editor to SVG.

use clap::Args;
use specedit_core::FrequencyInterval;
use specedit_session::{CommandId, Editor, EditorCommand, SpectrumEditor};
use std::path::{Path, PathBuf};

use super::common::{format_db, load_prefs, load_spectrum, open_session};
use crate::svg::SvgCanvas;

/// Render the spectrum view of a WAV file.
#[derive(Args)]
pub struct PlotArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output SVG file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Lowest visible frequency (Hz)
    #[arg(long, default_value = "0")]
    pub from: f64,

    /// Highest visible frequency (Hz, default: Nyquist)
    #[arg(long)]
    pub to: Option<f64>,

    /// Dynamic range (dB, default: from preferences)
    #[arg(long)]
    pub dynamic_range: Option<f64>,

    /// Place the cursor on the peak nearest this frequency (Hz)
    #[arg(long, value_name = "HZ")]
    pub peak: Option<f64>,

    /// Image width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "400")]
    pub height: u32,
}

/// Run the plot command.
pub fn run(args: PlotArgs, prefs_path: &Path) -> anyhow::Result<()> {
    let prefs = load_prefs(prefs_path)?.spectrum_editor;
    let (spectrum, _) = load_spectrum(&args.input)?;
    let view = FrequencyInterval::new(
        args.from,
        args.to.unwrap_or_else(|| spectrum.max_frequency()),
    );

    let mut editor = SpectrumEditor::new(open_session(spectrum, prefs)?);
    editor.session_mut().set_view(view)?;
    if let Some(dynamic_range_db) = args.dynamic_range {
        editor.handle_command(EditorCommand::SetDynamicRange { dynamic_range_db })?;
    }
    if let Some(frequency) = args.peak {
        editor
            .session_mut()
            .set_selection(FrequencyInterval::point(frequency));
        editor.handle_command(EditorCommand::MoveCursorToPeak)?;
    }

    let mut canvas = SvgCanvas::new(f64::from(args.width), f64::from(args.height));
    editor.draw(&mut canvas);
    let publishable = canvas
        .command_states()
        .iter()
        .any(|&(command, enabled)| command == CommandId::PublishBand && enabled);
    std::fs::write(&args.output, canvas.finish())?;

    let session = editor.session();
    let range = session.display_range();
    println!("Wrote {}", args.output.display());
    println!(
        "  View:    {:.1} - {:.1} Hz",
        session.view().low,
        session.view().high
    );
    println!(
        "  Range:   {} to {}",
        format_db(range.minimum_db),
        format_db(range.maximum_db)
    );
    if args.peak.is_some() {
        println!(
            "  Cursor:  {} at {:.2} Hz",
            format_db(session.cursor_height_db()),
            session.selection().low
        );
    }
    println!("  Publish: {}", if publishable { "available" } else { "no bins selected" });

    Ok(())
}
