//! Canvas geometry: card size, grid pitch, snapping and fallback slots.

use crate::model::subject::Position;
use serde::{Deserialize, Serialize};

pub const CARD_WIDTH: u32 = 220;
/// Rendered card height; snapping only follows the horizontal pitch.
pub const CARD_HEIGHT: u32 = 200;
pub const CARD_GAP: u32 = 20;
/// Columns used when auto-arranging unplaced cards.
pub const FALLBACK_COLUMNS: usize = 4;

/// Live, possibly fractional, card placement in canvas pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub left: f64,
    pub top: f64,
}

impl CanvasPoint {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn is_finite(self) -> bool {
        self.left.is_finite() && self.top.is_finite()
    }

    /// Moves by a pointer delta, clamping both axes at zero.
    ///
    /// A non-finite delta, or one that would overflow the finite range,
    /// leaves the point where it was.
    pub fn offset_clamped(self, dx: f64, dy: f64) -> Self {
        if !(dx.is_finite() && dy.is_finite()) {
            return self;
        }
        let moved = Self {
            left: (self.left + dx).max(0.0),
            top: (self.top + dy).max(0.0),
        };
        if moved.is_finite() {
            moved
        } else {
            self
        }
    }

    pub fn to_position(self) -> Position {
        Position::truncated(self.left, self.top)
    }
}

impl From<Position> for CanvasPoint {
    fn from(value: Position) -> Self {
        Self::new(value.x as f64, value.y as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub card_width: u32,
    pub card_gap: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_gap: CARD_GAP,
        }
    }
}

impl GridSpec {
    /// Distance between neighbouring grid slots.
    pub fn pitch(&self) -> u32 {
        self.card_width + self.card_gap
    }

    /// Rounds each axis to the nearest pitch multiple, halves away from zero.
    ///
    /// A zero pitch leaves the point unchanged.
    pub fn snap(&self, point: CanvasPoint) -> CanvasPoint {
        let pitch = f64::from(self.pitch());
        if pitch == 0.0 {
            return point;
        }
        CanvasPoint::new(
            (point.left / pitch).round() * pitch,
            (point.top / pitch).round() * pitch,
        )
    }

    /// Slot for the card at `index` in a `FALLBACK_COLUMNS`-wide lattice.
    pub fn fallback_position(&self, index: usize) -> Position {
        let pitch = i64::from(self.pitch());
        let column = (index % FALLBACK_COLUMNS) as i64;
        let row = (index / FALLBACK_COLUMNS) as i64;
        Position::new(column * pitch, row * pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasPoint, GridSpec};
    use crate::model::subject::Position;

    #[test]
    fn default_pitch_is_card_plus_gap() {
        assert_eq!(GridSpec::default().pitch(), 240);
    }

    #[test]
    fn snap_rounds_to_nearest_slot() {
        let grid = GridSpec::default();
        assert_eq!(
            grid.snap(CanvasPoint::new(130.0, 200.0)),
            CanvasPoint::new(240.0, 240.0)
        );
        assert_eq!(
            grid.snap(CanvasPoint::new(359.0, 361.0)),
            CanvasPoint::new(240.0, 480.0)
        );
    }

    #[test]
    fn snap_rounds_half_away_from_zero() {
        let grid = GridSpec::default();
        assert_eq!(
            grid.snap(CanvasPoint::new(120.0, 119.0)),
            CanvasPoint::new(240.0, 0.0)
        );
        assert_eq!(
            grid.snap(CanvasPoint::new(360.0, 600.0)),
            CanvasPoint::new(480.0, 720.0)
        );
    }

    #[test]
    fn zero_pitch_disables_snapping() {
        let grid = GridSpec {
            card_width: 0,
            card_gap: 0,
        };
        let point = CanvasPoint::new(13.5, 7.25);
        assert_eq!(grid.snap(point), point);
    }

    #[test]
    fn offset_clamps_at_zero() {
        let moved = CanvasPoint::default().offset_clamped(-50.0, -50.0);
        assert_eq!(moved, CanvasPoint::new(0.0, 0.0));
        let moved = CanvasPoint::new(10.0, 10.0).offset_clamped(-4.5, 30.0);
        assert_eq!(moved, CanvasPoint::new(5.5, 40.0));
    }

    #[test]
    fn non_finite_offsets_keep_the_point() {
        let start = CanvasPoint::new(480.0, 240.0);
        assert_eq!(start.offset_clamped(f64::NAN, 10.0), start);
        assert_eq!(start.offset_clamped(0.0, f64::INFINITY), start);
        let far = CanvasPoint::new(f64::MAX, 0.0);
        assert_eq!(far.offset_clamped(f64::MAX, 0.0), far);
        assert_eq!(start.offset_clamped(f64::NEG_INFINITY, 0.0), start);
    }

    #[test]
    fn fallback_wraps_after_four_columns() {
        let grid = GridSpec::default();
        assert_eq!(grid.fallback_position(0), Position::new(0, 0));
        assert_eq!(grid.fallback_position(3), Position::new(720, 0));
        assert_eq!(grid.fallback_position(4), Position::new(0, 240));
        assert_eq!(grid.fallback_position(9), Position::new(240, 480));
    }
}
