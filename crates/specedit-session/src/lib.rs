//! Interactive editing of a spectrum.
//!
//! This crate ties the `specedit-core` routines to the state of an open
//! editor window: where the cursor is, which band is selected, which part
//! of the spectrum is visible, and how loud the display goes.
//!
//! - [`session`] - [`EditSession`], the state machine behind every command
//! - [`host`] - the collaborator traits ([`EditorHost`], [`UndoJournal`],
//!   [`SpectralPrimitives`]) and their default implementations
//! - [`editor`] - the [`Editor`] capability and [`SpectrumEditor`]
//! - [`canvas`] - the [`Canvas`] rendering seam and a recording
//!   [`DisplayList`]
//!
//! # Example
//!
//! ```rust
//! use specedit_config::EditorPrefs;
//! use specedit_core::{FrequencyArray, FrequencyInterval, HannBand};
//! use specedit_session::{EditSession, HostEvent, RecordingHost};
//!
//! let array = FrequencyArray::new(0.0, 100.0, vec![1.0; 11], vec![0.0; 11]).unwrap();
//! let mut session = EditSession::new(array, EditorPrefs::default(), RecordingHost::new()).unwrap();
//!
//! session.set_selection(FrequencyInterval::new(300.0, 700.0));
//! session.on_filter_command(HannBand::Stop, 0.0).unwrap();
//! assert_eq!(session.array().real()[5], 0.0);
//! assert_eq!(
//!     session.host().events().last(),
//!     Some(&HostEvent::DataChanged)
//! );
//! ```

pub mod canvas;
pub mod editor;
pub mod error;
pub mod host;
pub mod session;

pub use canvas::{Canvas, Colour, DisplayList, DrawOp, MarkEdge, Rect};
pub use editor::{CommandId, Editor, EditorCommand, MenuEntry, SpectrumEditor};
pub use error::EditError;
pub use host::{
    EditorHost, HannPrimitives, HostError, HostEvent, JournalError, MemoryJournal, Publication,
    RecordingHost, SpectralPrimitives, UndoJournal,
};
pub use session::{EditSession, INITIAL_CURSOR_HEIGHT_DB, SessionPhase};
