//! Facing vector to compass glyph resolution.

use crate::types::{Direction, FacingVector};

/// Resolve an optional facing vector to one of the four directions.
///
/// Absent or non-canonical vectors (diagonals, zero, out of range) resolve to
/// [`Direction::Down`]. This never fails.
pub fn resolve_direction(facing: Option<FacingVector>) -> Direction {
    let Some(v) = facing else {
        return Direction::default();
    };
    match Direction::from_vector(v) {
        Some(d) => d,
        None => {
            log::trace!("non-canonical facing ({}, {}), using default", v.x, v.y);
            Direction::default()
        }
    }
}

/// Glyph for an optional facing vector.
pub fn resolve_glyph(facing: Option<FacingVector>) -> char {
    resolve_direction(facing).glyph()
}
