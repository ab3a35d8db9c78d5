//! Decibel display window and vertical coordinate mapping.
//!
//! The editor plots power density between [`DisplayRange::minimum_db`]
//! (bottom, `y = 0`) and [`DisplayRange::maximum_db`] (top, `y = 1`). The
//! default window hangs `dynamic_range_db` below the loudest bin; a silent
//! spectrum gets the fixed `-1000..1000` window instead.

use crate::array::FrequencyArray;
use crate::power::power_density_range;

/// Bottom of the fallback window used when the spectrum has no power.
pub const FALLBACK_MINIMUM_DB: f64 = -1000.0;

/// Top of the fallback window used when the spectrum has no power.
pub const FALLBACK_MAXIMUM_DB: f64 = 1000.0;

/// Vertical dB window of the spectrum display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    /// Value plotted at the bottom edge.
    pub minimum_db: f64,
    /// Value plotted at the top edge.
    pub maximum_db: f64,
    /// Preferred span below the maximum.
    pub dynamic_range_db: f64,
}

impl DisplayRange {
    /// Window spanning `dynamic_range_db` below `maximum_db`.
    pub fn from_maximum(maximum_db: f64, dynamic_range_db: f64) -> Self {
        Self {
            minimum_db: maximum_db - dynamic_range_db,
            maximum_db,
            dynamic_range_db,
        }
    }

    /// The fixed wide window for spectra without usable power data.
    pub fn fallback(dynamic_range_db: f64) -> Self {
        Self {
            minimum_db: FALLBACK_MINIMUM_DB,
            maximum_db: FALLBACK_MAXIMUM_DB,
            dynamic_range_db,
        }
    }

    /// Build the window from a power-density query result.
    pub fn from_query(query: Option<(f64, f64)>, dynamic_range_db: f64) -> Self {
        match query {
            Some((_, maximum_db)) => Self::from_maximum(maximum_db, dynamic_range_db),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("power density query returned no data, using fallback window");
                Self::fallback(dynamic_range_db)
            }
        }
    }

    /// Displayed span in dB.
    pub fn span(&self) -> f64 {
        self.maximum_db - self.minimum_db
    }

    /// dB value at normalized height `y` (0 = bottom, 1 = top).
    pub fn db_at(&self, y: f64) -> f64 {
        self.minimum_db + y * (self.maximum_db - self.minimum_db)
    }

    /// Normalized height of `db`; inverse of [`db_at`](Self::db_at).
    pub fn normalized(&self, db: f64) -> f64 {
        (db - self.minimum_db) / (self.maximum_db - self.minimum_db)
    }

    /// True when `db` lies strictly inside the window.
    pub fn contains_strictly(&self, db: f64) -> bool {
        self.minimum_db < db && db < self.maximum_db
    }

    /// Clamp `db` into the window.
    pub fn clip(&self, db: f64) -> f64 {
        db.clamp(self.minimum_db, self.maximum_db)
    }
}

/// Default display window for `array`.
///
/// Hangs `dynamic_range_db` below the loudest bin, or falls back to
/// `-1000..1000` dB for a silent spectrum.
pub fn compute_default_range(array: &FrequencyArray, dynamic_range_db: f64) -> DisplayRange {
    DisplayRange::from_query(power_density_range(array), dynamic_range_db)
}

/// dB value under a click at normalized height `y`.
pub fn map_click_to_db(y: f64, range: &DisplayRange) -> f64 {
    range.db_at(y)
}

/// Normalized height at which `db` is drawn.
pub fn db_to_normalized(db: f64, range: &DisplayRange) -> f64 {
    range.normalized(db)
}

/// The cursor hairline is drawn only strictly inside the window; it is
/// suppressed, not clamped, outside it.
pub fn cursor_visible(range: &DisplayRange, cursor_height_db: f64) -> bool {
    range.contains_strictly(cursor_height_db)
}
