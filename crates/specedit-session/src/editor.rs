//! Editor capability and the spectrum editor.
//!
//! [`Editor`] is what a windowed framework needs from any editor: paint
//! yourself, take a click, run a menu command, list your menu. The
//! [`SpectrumEditor`] implements it by composing an [`EditSession`].

use specedit_core::{HannBand, cursor_visible, power_density_db};

use crate::canvas::{Canvas, Colour, MarkEdge, Rect};
use crate::error::EditError;
use crate::host::{EditorHost, HannPrimitives, MemoryJournal, SpectralPrimitives, UndoJournal};
use crate::session::EditSession;

/// Identifies a menu command, independent of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Publish the selected band as a spectrum.
    PublishBand,
    /// Publish the selected band as a sound.
    PublishSound,
    /// Hann band-pass over the selection.
    PassBand,
    /// Hann band-stop over the selection.
    StopBand,
    /// Move the cursor to the nearest peak.
    MoveCursorToPeak,
    /// Change the display's dynamic range.
    SetDynamicRange,
    /// Revert the last edit.
    Undo,
    /// Reapply the last undone edit.
    Redo,
    /// Play the selected band.
    Play,
}

/// A command together with its form arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorCommand {
    /// Publish the selected band as a spectrum.
    PublishBand,
    /// Publish the selected band as a sound.
    PublishSound,
    /// Hann band-pass over the selection.
    PassBand {
        /// Ramp width in Hz.
        smoothing_hz: f64,
    },
    /// Hann band-stop over the selection.
    StopBand {
        /// Ramp width in Hz.
        smoothing_hz: f64,
    },
    /// Move the cursor to the nearest peak.
    MoveCursorToPeak,
    /// Change the display's dynamic range.
    SetDynamicRange {
        /// New range in dB.
        dynamic_range_db: f64,
    },
    /// Revert the last edit.
    Undo,
    /// Reapply the last undone edit.
    Redo,
    /// Play the selected band.
    Play,
}

impl EditorCommand {
    /// The command's identifier.
    pub fn id(&self) -> CommandId {
        match self {
            EditorCommand::PublishBand => CommandId::PublishBand,
            EditorCommand::PublishSound => CommandId::PublishSound,
            EditorCommand::PassBand { .. } => CommandId::PassBand,
            EditorCommand::StopBand { .. } => CommandId::StopBand,
            EditorCommand::MoveCursorToPeak => CommandId::MoveCursorToPeak,
            EditorCommand::SetDynamicRange { .. } => CommandId::SetDynamicRange,
            EditorCommand::Undo => CommandId::Undo,
            EditorCommand::Redo => CommandId::Redo,
            EditorCommand::Play => CommandId::Play,
        }
    }
}

/// One entry of an editor's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Menu heading the entry sits under.
    pub menu: &'static str,
    /// Entry text. A trailing `...` means the command opens a form.
    pub title: &'static str,
    /// Keyboard shortcut, if any.
    pub shortcut: Option<char>,
    /// Command run by the entry.
    pub command: CommandId,
    /// Greyed out unless the selection covers a bin.
    pub needs_selection: bool,
}

const SPECTRUM_MENU: &[MenuEntry] = &[
    MenuEntry {
        menu: "File",
        title: "Publish band",
        shortcut: None,
        command: CommandId::PublishBand,
        needs_selection: true,
    },
    MenuEntry {
        menu: "File",
        title: "Publish band-filtered sound",
        shortcut: None,
        command: CommandId::PublishSound,
        needs_selection: true,
    },
    MenuEntry {
        menu: "Edit",
        title: "Pass band...",
        shortcut: None,
        command: CommandId::PassBand,
        needs_selection: false,
    },
    MenuEntry {
        menu: "Edit",
        title: "Stop band...",
        shortcut: None,
        command: CommandId::StopBand,
        needs_selection: false,
    },
    MenuEntry {
        menu: "Query",
        title: "Move cursor to nearest peak",
        shortcut: Some('K'),
        command: CommandId::MoveCursorToPeak,
        needs_selection: false,
    },
    MenuEntry {
        menu: "View",
        title: "Set dynamic range...",
        shortcut: None,
        command: CommandId::SetDynamicRange,
        needs_selection: false,
    },
];

/// What a windowed framework needs from an editor.
pub trait Editor {
    /// Window title prefix, e.g. `"Spectrum"`.
    fn name(&self) -> &'static str;

    /// Paint the current state.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Handle a click at normalized plot coordinates.
    fn handle_click(&mut self, x: f64, y: f64, shift: bool);

    /// Run a menu command.
    fn handle_command(&mut self, command: EditorCommand) -> Result<(), EditError>;

    /// The editor's menu entries.
    fn menu(&self) -> &'static [MenuEntry];
}

/// Editor for a spectrum, driven by an [`EditSession`].
#[derive(Debug)]
pub struct SpectrumEditor<H, J = MemoryJournal, P = HannPrimitives> {
    session: EditSession<H, J, P>,
}

impl<H, J, P> SpectrumEditor<H, J, P>
where
    H: EditorHost,
    J: UndoJournal,
    P: SpectralPrimitives,
{
    /// Wrap a session.
    pub fn new(session: EditSession<H, J, P>) -> Self {
        Self { session }
    }

    /// The underlying session.
    pub fn session(&self) -> &EditSession<H, J, P> {
        &self.session
    }

    /// Mutable access to the underlying session.
    pub fn session_mut(&mut self) -> &mut EditSession<H, J, P> {
        &mut self.session
    }

    /// Unwrap the session.
    pub fn into_session(self) -> EditSession<H, J, P> {
        self.session
    }

    fn curve(&self) -> Vec<(f64, f64)> {
        let array = self.session.array();
        let view = self.session.view();
        let range = self.session.display_range();
        let width = view.width();

        array
            .bins_within(view)
            .map(|i| {
                let x = if width > 0.0 {
                    (array.frequency_of(i) - view.low) / width
                } else {
                    0.5
                };
                let db = range.clip(power_density_db(array, i));
                (x, range.normalized(db))
            })
            .collect()
    }
}

impl<H, J, P> Editor for SpectrumEditor<H, J, P>
where
    H: EditorHost,
    J: UndoJournal,
    P: SpectralPrimitives,
{
    fn name(&self) -> &'static str {
        "Spectrum"
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let range = self.session.display_range();

        canvas.fill_rectangle(Rect::UNIT, Colour::White);
        let curve = self.curve();
        if !curve.is_empty() {
            canvas.polyline(&curve, Colour::Black);
        }
        canvas.rectangle(Rect::UNIT, Colour::Black);

        canvas.range_mark(
            range.maximum_db,
            &format!("{:.1} dB", range.maximum_db),
            MarkEdge::Top,
        );
        canvas.range_mark(
            range.minimum_db,
            &format!("{:.1} dB", range.minimum_db),
            MarkEdge::Bottom,
        );

        let cursor = self.session.cursor_height_db();
        if cursor_visible(&range, cursor) {
            canvas.horizontal_hair(
                range.normalized(cursor),
                &format!("{cursor:.1} dB"),
                Colour::Red,
            );
        }

        let publishable = self.session.can_publish();
        for entry in SPECTRUM_MENU.iter().filter(|entry| entry.needs_selection) {
            canvas.set_command_enabled(entry.command, publishable);
        }
    }

    fn handle_click(&mut self, x: f64, y: f64, shift: bool) {
        self.session.on_click(x, y, shift);
    }

    fn handle_command(&mut self, command: EditorCommand) -> Result<(), EditError> {
        tracing::debug!(command = ?command.id(), "handle command");
        match command {
            EditorCommand::PublishBand => self.session.publish_band(),
            EditorCommand::PublishSound => self.session.publish_sound(),
            EditorCommand::PassBand { smoothing_hz } => {
                self.session.on_filter_command(HannBand::Pass, smoothing_hz)
            }
            EditorCommand::StopBand { smoothing_hz } => {
                self.session.on_filter_command(HannBand::Stop, smoothing_hz)
            }
            EditorCommand::MoveCursorToPeak => self.session.on_move_cursor_to_peak().map(|_| ()),
            EditorCommand::SetDynamicRange { dynamic_range_db } => {
                self.session.on_set_dynamic_range(dynamic_range_db)
            }
            EditorCommand::Undo => self.session.undo(),
            EditorCommand::Redo => self.session.redo(),
            EditorCommand::Play => {
                let selection = self.session.selection();
                self.session.play(selection.low, selection.high)
            }
        }
    }

    fn menu(&self) -> &'static [MenuEntry] {
        SPECTRUM_MENU
    }
}
