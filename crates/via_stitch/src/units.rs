//! Conversions between millimetres and board-internal units.
//!
//! Board-internal units are nanometres, matching KiCad's internal length
//! unit, so plain `i64` coordinates cover any realistic board.

/// Board-internal units per millimetre.
pub const UNITS_PER_MM: f64 = 1_000_000.0;

/// Convert millimetres to board units, rounding to the nearest unit.
#[inline]
pub fn from_mm(mm: f64) -> i64 {
    (mm * UNITS_PER_MM).round() as i64
}

/// Convert board units to millimetres.
#[inline]
pub fn to_mm(units: i64) -> f64 {
    units as f64 / UNITS_PER_MM
}
