//! Collaborator traits consumed by the edit session.
//!
//! An [`EditSession`](crate::EditSession) never talks to a window system, an
//! undo stack, or an audio device directly. It goes through three seams:
//!
//! ```text
//!                    ┌──────────────────────┐
//!  SpectralPrimitives│  power range, taper, │  HannPrimitives (specedit-core)
//!                    │  inverse transform   │
//!                    └──────────┬───────────┘
//!                               │
//!                         EditSession
//!                          │         │
//!              UndoJournal │         │ EditorHost
//!          (MemoryJournal) │         │ (RecordingHost, GUI, CLI)
//!                          ▼         ▼
//!                   before-snapshots  redraw / data changed /
//!                                     publish / play
//! ```
//!
//! All calls are synchronous and happen on the caller's thread.

use specedit_core::{
    FrequencyArray, FrequencyInterval, HannBand, Sound, SpectrumError, apply_hann_band,
    power_density_range, spectrum_to_sound,
};
use thiserror::Error;

// ============================================================================
// Spectral primitives
// ============================================================================

/// Numerical routines the session delegates to.
pub trait SpectralPrimitives {
    /// Minimum and maximum power density in dB, or `None` for a silent
    /// spectrum.
    fn power_density_range(&self, array: &FrequencyArray) -> Option<(f64, f64)>;

    /// Apply a Hann-tapered pass or stop band in place.
    fn apply_hann_band(
        &self,
        array: &mut FrequencyArray,
        mode: HannBand,
        band: FrequencyInterval,
        smoothing_hz: f64,
    );

    /// Inverse transform to a time-domain sound.
    fn to_sound(&self, array: &FrequencyArray) -> Result<Sound, SpectrumError>;
}

/// [`SpectralPrimitives`] backed by `specedit-core`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HannPrimitives;

impl SpectralPrimitives for HannPrimitives {
    fn power_density_range(&self, array: &FrequencyArray) -> Option<(f64, f64)> {
        power_density_range(array)
    }

    fn apply_hann_band(
        &self,
        array: &mut FrequencyArray,
        mode: HannBand,
        band: FrequencyInterval,
        smoothing_hz: f64,
    ) {
        apply_hann_band(array, mode, band, smoothing_hz);
    }

    fn to_sound(&self, array: &FrequencyArray) -> Result<Sound, SpectrumError> {
        spectrum_to_sound(array)
    }
}

// ============================================================================
// Undo journal
// ============================================================================

/// Error raised when the journal cannot store a snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// The journal declined the entry.
    #[error("undo journal refused '{label}': {reason}")]
    Refused {
        /// Label of the rejected step.
        label: String,
        /// Why it was refused.
        reason: String,
    },
}

/// Storage for "before" snapshots of destructive edits.
///
/// `push` receives an owned copy of the array as it was before the edit.
/// `undo` and `redo` receive the array as it is now and hand back the one
/// to restore.
pub trait UndoJournal {
    /// Record the state before an edit labelled `label`.
    fn push(&mut self, label: &str, before: FrequencyArray) -> Result<(), JournalError>;

    /// Step back, stashing `current` for redo.
    fn undo(&mut self, current: &FrequencyArray) -> Option<FrequencyArray>;

    /// Step forward again, stashing `current` for undo.
    fn redo(&mut self, current: &FrequencyArray) -> Option<FrequencyArray>;

    /// Label of the step [`undo`](Self::undo) would revert.
    fn undo_label(&self) -> Option<&str>;

    /// Label of the step [`redo`](Self::redo) would reapply.
    fn redo_label(&self) -> Option<&str>;
}

#[derive(Debug, Clone)]
struct JournalEntry {
    label: String,
    snapshot: FrequencyArray,
}

/// Unbounded in-memory [`UndoJournal`].
#[derive(Debug, Clone, Default)]
pub struct MemoryJournal {
    undo_stack: Vec<JournalEntry>,
    redo_stack: Vec<JournalEntry>,
}

impl MemoryJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of steps that can be redone.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Labels of the undoable steps, oldest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().map(|entry| entry.label.as_str())
    }
}

impl UndoJournal for MemoryJournal {
    fn push(&mut self, label: &str, before: FrequencyArray) -> Result<(), JournalError> {
        self.redo_stack.clear();
        self.undo_stack.push(JournalEntry {
            label: label.to_string(),
            snapshot: before,
        });
        Ok(())
    }

    fn undo(&mut self, current: &FrequencyArray) -> Option<FrequencyArray> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(JournalEntry {
            label: entry.label,
            snapshot: current.clone(),
        });
        Some(entry.snapshot)
    }

    fn redo(&mut self, current: &FrequencyArray) -> Option<FrequencyArray> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(JournalEntry {
            label: entry.label,
            snapshot: current.clone(),
        });
        Some(entry.snapshot)
    }

    fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|entry| entry.label.as_str())
    }

    fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|entry| entry.label.as_str())
    }
}

// ============================================================================
// Editor host
// ============================================================================

/// Error raised by the hosting framework.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Audio playback is not possible.
    #[error("playback failed: {0}")]
    Playback(String),
}

/// An object derived from the spectrum and handed to the outside world.
///
/// Publications are independent copies; later edits do not affect them.
#[derive(Debug, Clone, PartialEq)]
pub enum Publication {
    /// The selected band as a spectrum.
    Band(FrequencyArray),
    /// The selected band synthesized to a sound.
    Sound(Sound),
}

/// The windowed-editor framework hosting a session.
pub trait EditorHost {
    /// Schedule a repaint of the editor.
    fn request_redraw(&mut self);

    /// Tell other views of the spectrum that its data changed.
    fn data_changed(&mut self);

    /// Hand a derived object to the surrounding application.
    fn publish(&mut self, publication: Publication);

    /// Play a sound.
    fn play(&mut self, sound: &Sound) -> Result<(), HostError>;
}

/// Something an [`EditorHost`] was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// [`EditorHost::request_redraw`].
    Redraw,
    /// [`EditorHost::data_changed`].
    DataChanged,
    /// [`EditorHost::publish`].
    Published(Publication),
    /// [`EditorHost::play`].
    Played(Sound),
}

/// Headless [`EditorHost`] that records every request in order.
///
/// Used by the command-line front end and by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
    playback_error: Option<String>,
}

impl RecordingHost {
    /// Create a host with playback available.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose `play` always fails with `reason`.
    pub fn without_playback(reason: impl Into<String>) -> Self {
        Self {
            events: Vec::new(),
            playback_error: Some(reason.into()),
        }
    }

    /// Everything recorded so far.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain only the publications, dropping other events.
    pub fn take_publications(&mut self) -> Vec<Publication> {
        self.take_events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Published(publication) => Some(publication),
                _ => None,
            })
            .collect()
    }
}

impl EditorHost for RecordingHost {
    fn request_redraw(&mut self) {
        self.events.push(HostEvent::Redraw);
    }

    fn data_changed(&mut self) {
        self.events.push(HostEvent::DataChanged);
    }

    fn publish(&mut self, publication: Publication) {
        self.events.push(HostEvent::Published(publication));
    }

    fn play(&mut self, sound: &Sound) -> Result<(), HostError> {
        if let Some(reason) = &self.playback_error {
            return Err(HostError::Playback(reason.clone()));
        }
        self.events.push(HostEvent::Played(sound.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(value: f64) -> FrequencyArray {
        FrequencyArray::new(0.0, 10.0, vec![value; 4], vec![0.0; 4]).unwrap()
    }

    #[test]
    fn undo_then_redo_restores_both_states() {
        let mut journal = MemoryJournal::new();
        journal.push("Pass band", array(1.0)).unwrap();
        assert_eq!(journal.undo_label(), Some("Pass band"));

        let restored = journal.undo(&array(2.0)).unwrap();
        assert_eq!(restored, array(1.0));
        assert_eq!(journal.redo_label(), Some("Pass band"));
        assert_eq!(journal.undo_depth(), 0);

        let reapplied = journal.redo(&restored).unwrap();
        assert_eq!(reapplied, array(2.0));
        assert_eq!(journal.undo_depth(), 1);
        assert_eq!(journal.redo_depth(), 0);
    }

    #[test]
    fn push_clears_redo() {
        let mut journal = MemoryJournal::new();
        journal.push("Pass band", array(1.0)).unwrap();
        journal.undo(&array(2.0)).unwrap();
        journal.push("Stop band", array(1.0)).unwrap();
        assert!(journal.redo(&array(3.0)).is_none());
        assert_eq!(journal.labels().collect::<Vec<_>>(), vec!["Stop band"]);
    }

    #[test]
    fn empty_journal_has_nothing() {
        let mut journal = MemoryJournal::new();
        assert!(journal.undo(&array(0.0)).is_none());
        assert!(journal.redo(&array(0.0)).is_none());
        assert!(journal.undo_label().is_none());
    }

    #[test]
    fn recording_host_without_playback() {
        let mut host = RecordingHost::without_playback("no device");
        let err = host.play(&Sound::new(vec![0.0], 8000.0)).unwrap_err();
        assert_eq!(err, HostError::Playback("no device".to_string()));
        assert!(host.events().is_empty());
    }

    #[test]
    fn take_publications_filters() {
        let mut host = RecordingHost::new();
        host.request_redraw();
        host.publish(Publication::Band(array(1.0)));
        host.data_changed();
        assert_eq!(host.take_publications(), vec![Publication::Band(array(1.0))]);
        assert!(host.events().is_empty());
    }
}
