//! The spectrum edit session.
//!
//! [`EditSession`] owns one [`FrequencyArray`] together with the interactive
//! state around it: cursor height, selected band, visible window, display
//! range, and preferences. Every destructive operation runs through the
//! same pipeline:
//!
//! ```text
//! Idle ──► Validating ──► Committing ──► Idle
//!              │              │
//!              │ Err          ├─ journal.push(label, before)   (abort on Err)
//!              ▼              ├─ apply in place
//!            Idle             ├─ refresh display range
//!                             ├─ host.request_redraw()
//!                             └─ host.data_changed()
//! ```
//!
//! Validation and the journal push both happen before the array is touched,
//! so a failed operation leaves no trace.

use specedit_config::{EditorPrefs, validate_band_smoothing, validate_dynamic_range, validate_prefs};
use specedit_core::{
    DisplayRange, FrequencyArray, FrequencyInterval, HannBand, Peak, SpectrumError,
    isolate_band, map_click_to_db, nearest_peak,
};

use crate::error::EditError;
use crate::host::{EditorHost, HannPrimitives, MemoryJournal, Publication, SpectralPrimitives, UndoJournal};

/// Cursor height of a fresh session, below any realistic display window.
pub const INITIAL_CURSOR_HEIGHT_DB: f64 = -1000.0;

/// Where a session is in its operation pipeline.
///
/// Always [`Idle`](Self::Idle) between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Waiting for input.
    #[default]
    Idle,
    /// Checking the selection and arguments of a destructive operation.
    Validating,
    /// Recording the undo step and applying the edit.
    Committing,
}

/// Interactive editing state for one spectrum.
///
/// `H` is the hosting framework, `J` the undo journal, `P` the spectral
/// primitives. The defaults use the in-memory journal and `specedit-core`.
#[derive(Debug)]
pub struct EditSession<H, J = MemoryJournal, P = HannPrimitives> {
    array: FrequencyArray,
    cursor_height_db: f64,
    selection: FrequencyInterval,
    view: FrequencyInterval,
    display_range: DisplayRange,
    prefs: EditorPrefs,
    phase: SessionPhase,
    host: H,
    journal: J,
    primitives: P,
}

impl<H: EditorHost> EditSession<H> {
    /// Open a session with an in-memory journal and the default primitives.
    pub fn new(array: FrequencyArray, prefs: EditorPrefs, host: H) -> Result<Self, EditError> {
        Self::with_parts(array, prefs, host, MemoryJournal::new(), HannPrimitives)
    }
}

impl<H, J, P> EditSession<H, J, P>
where
    H: EditorHost,
    J: UndoJournal,
    P: SpectralPrimitives,
{
    /// Open a session with explicit collaborators.
    ///
    /// The selection starts collapsed at the bottom of the domain and the
    /// view covers the whole domain.
    pub fn with_parts(
        array: FrequencyArray,
        prefs: EditorPrefs,
        host: H,
        journal: J,
        primitives: P,
    ) -> Result<Self, EditError> {
        validate_prefs(&prefs)?;

        let domain = array.domain();
        let display_range =
            DisplayRange::from_query(primitives.power_density_range(&array), prefs.dynamic_range_db);

        tracing::debug!(
            bins = array.bin_count(),
            min_db = display_range.minimum_db,
            max_db = display_range.maximum_db,
            "opened spectrum edit session"
        );

        Ok(Self {
            array,
            cursor_height_db: INITIAL_CURSOR_HEIGHT_DB,
            selection: FrequencyInterval::point(domain.low),
            view: domain,
            display_range,
            prefs,
            phase: SessionPhase::Idle,
            host,
            journal,
            primitives,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The spectrum being edited.
    pub fn array(&self) -> &FrequencyArray {
        &self.array
    }

    /// Close the session and keep the edited spectrum.
    pub fn into_array(self) -> FrequencyArray {
        self.array
    }

    /// Height of the horizontal cursor in dB.
    pub fn cursor_height_db(&self) -> f64 {
        self.cursor_height_db
    }

    /// Selected frequency band. `low == high` means no band is selected.
    pub fn selection(&self) -> FrequencyInterval {
        self.selection
    }

    /// Visible frequency window.
    pub fn view(&self) -> FrequencyInterval {
        self.view
    }

    /// Current vertical display window.
    pub fn display_range(&self) -> DisplayRange {
        self.display_range
    }

    /// Current preferences, including any changes made during the session.
    pub fn prefs(&self) -> EditorPrefs {
        self.prefs
    }

    /// Pipeline phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The hosting framework.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the hosting framework.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The undo journal.
    pub fn journal(&self) -> &J {
        &self.journal
    }

    /// True when the selection covers at least one bin.
    pub fn can_publish(&self) -> bool {
        self.array.window_bin_count(self.selection) > 0
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Handle a click at normalized view coordinates.
    ///
    /// `x` runs across the visible window and `y` up the display range,
    /// both in `0..=1`. A plain click moves the cursor and collapses the
    /// selection; a shift-click drags the nearer selection edge instead.
    pub fn on_click(&mut self, x: f64, y: f64, shift: bool) {
        let frequency = self.view.low + x.clamp(0.0, 1.0) * self.view.width();
        self.cursor_height_db = map_click_to_db(y, &self.display_range);

        if shift {
            let FrequencyInterval { low, high } = self.selection;
            self.selection = if (frequency - low).abs() <= (frequency - high).abs() {
                FrequencyInterval::new(frequency.min(high), high.max(frequency))
            } else {
                FrequencyInterval::new(low.min(frequency), frequency.max(low))
            };
        } else {
            self.selection = FrequencyInterval::point(frequency);
        }

        tracing::trace!(
            frequency,
            cursor_db = self.cursor_height_db,
            low = self.selection.low,
            high = self.selection.high,
            "click"
        );
        self.host.request_redraw();
    }

    /// Replace the selection as given.
    ///
    /// An inverted interval is kept as is; destructive commands refuse it.
    pub fn set_selection(&mut self, selection: FrequencyInterval) {
        self.selection = selection;
        self.host.request_redraw();
    }

    /// Change the visible frequency window.
    pub fn set_view(&mut self, view: FrequencyInterval) -> Result<(), EditError> {
        if !(view.low.is_finite() && view.high.is_finite()) || !view.is_well_ordered() {
            return Err(EditError::invalid_parameter(
                "view",
                view.width(),
                "must be a finite, non-empty frequency window",
            ));
        }
        self.view = view;
        self.host.request_redraw();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Destructive edits
    // ------------------------------------------------------------------

    /// Apply a Hann-tapered pass or stop band over the selection.
    ///
    /// The smoothing width becomes the new band-smoothing preference even
    /// when the selection turns out to be empty.
    pub fn on_filter_command(&mut self, mode: HannBand, smoothing_hz: f64) -> Result<(), EditError> {
        self.enter(SessionPhase::Validating);
        let result = self.filter(mode, smoothing_hz);
        self.enter(SessionPhase::Idle);
        result?;

        tracing::info!(
            mode = mode.filter_name(),
            low = self.selection.low,
            high = self.selection.high,
            smoothing_hz,
            "applied hann band"
        );
        Ok(())
    }

    /// Revert the most recent edit.
    pub fn undo(&mut self) -> Result<(), EditError> {
        let restored = self.journal.undo(&self.array).ok_or(EditError::NothingToUndo)?;
        self.restore(restored);
        tracing::debug!("undo");
        Ok(())
    }

    /// Reapply the most recently undone edit.
    pub fn redo(&mut self) -> Result<(), EditError> {
        let restored = self.journal.redo(&self.array).ok_or(EditError::NothingToRedo)?;
        self.restore(restored);
        tracing::debug!("redo");
        Ok(())
    }

    fn filter(&mut self, mode: HannBand, smoothing_hz: f64) -> Result<(), EditError> {
        self.prefs.band_smoothing_hz = validate_band_smoothing(smoothing_hz)?;
        if !self.selection.is_well_ordered() {
            let operation = match mode {
                HannBand::Pass => "apply a band-pass filter",
                HannBand::Stop => "apply a band-stop filter",
            };
            return Err(EditError::InvalidSelection { operation });
        }

        self.enter(SessionPhase::Committing);
        self.journal
            .push(mode.label(), self.array.clone())
            .map_err(EditError::JournalFailure)?;

        let band = self.selection;
        self.primitives
            .apply_hann_band(&mut self.array, mode, band, smoothing_hz);
        self.refresh_range();
        self.host.request_redraw();
        self.host.data_changed();
        Ok(())
    }

    fn enter(&mut self, phase: SessionPhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "session phase");
        self.phase = phase;
    }

    fn restore(&mut self, array: FrequencyArray) {
        self.array = array;
        self.refresh_range();
        self.host.request_redraw();
        self.host.data_changed();
    }

    // ------------------------------------------------------------------
    // Non-destructive commands
    // ------------------------------------------------------------------

    /// Move the cursor to the peak nearest the middle of the selection.
    ///
    /// The selection collapses onto the peak and the cursor height becomes
    /// the peak's power density.
    pub fn on_move_cursor_to_peak(&mut self) -> Result<Peak, EditError> {
        let query = self.selection.midpoint();
        let peak = nearest_peak(&self.array, query).map_err(|err| match err {
            SpectrumError::NoPeakFound { frequency } => EditError::NoPeakFound { frequency },
            other => EditError::Spectrum(other),
        })?;

        self.selection = FrequencyInterval::point(peak.frequency);
        self.cursor_height_db = peak.amplitude_db;
        tracing::debug!(
            query,
            frequency = peak.frequency,
            amplitude_db = peak.amplitude_db,
            "moved cursor to peak"
        );
        self.host.request_redraw();
        Ok(peak)
    }

    /// Change the dynamic range and recompute the display window.
    pub fn on_set_dynamic_range(&mut self, dynamic_range_db: f64) -> Result<(), EditError> {
        self.prefs.dynamic_range_db = validate_dynamic_range(dynamic_range_db)?;
        self.refresh_range();
        self.host.request_redraw();
        Ok(())
    }

    /// React to a change made to the spectrum from outside the session.
    pub fn on_data_changed(&mut self) {
        self.refresh_range();
        self.host.request_redraw();
    }

    /// Replace the spectrum wholesale, e.g. after another view edited it.
    ///
    /// The undo history is kept; the selection and view are left alone.
    pub fn replace_array(&mut self, array: FrequencyArray) {
        self.array = array;
        self.on_data_changed();
    }

    /// Publish the selected band as a spectrum.
    pub fn publish_band(&mut self) -> Result<(), EditError> {
        let band = self.selected_band("publish a band")?;
        self.host.publish(Publication::Band(band));
        Ok(())
    }

    /// Publish the selected band synthesized to a sound.
    pub fn publish_sound(&mut self) -> Result<(), EditError> {
        let band = self.selected_band("publish a band-filtered sound")?;
        let sound = self.primitives.to_sound(&band)?;
        self.host.publish(Publication::Sound(sound));
        Ok(())
    }

    /// Play the part of the spectrum between `low` and `high` Hz.
    pub fn play(&mut self, low: f64, high: f64) -> Result<(), EditError> {
        let band = isolate_band(&self.array, FrequencyInterval::new(low, high));
        let sound = self.primitives.to_sound(&band)?;
        tracing::debug!(low, high, samples = sound.len(), "play band");
        self.host.play(&sound)?;
        Ok(())
    }

    fn selected_band(&self, operation: &'static str) -> Result<FrequencyArray, EditError> {
        if !self.can_publish() {
            return Err(EditError::InvalidSelection { operation });
        }
        Ok(isolate_band(&self.array, self.selection))
    }

    fn refresh_range(&mut self) {
        let query = self.primitives.power_density_range(&self.array);
        self.display_range = DisplayRange::from_query(query, self.prefs.dynamic_range_db);
    }
}
