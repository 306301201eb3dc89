//! Subject model and persisted canvas position.

use serde::{Deserialize, Serialize};

/// Row id of a subject.
pub type SubjectId = i64;

/// Persisted card position in canvas pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Converts fractional canvas coordinates by truncating toward zero.
    ///
    /// Out-of-range values saturate; callers holding untrusted input use
    /// [`Position::try_truncated`].
    pub fn truncated(x: f64, y: f64) -> Self {
        Self {
            x: x.trunc() as i64,
            y: y.trunc() as i64,
        }
    }

    /// Like [`Position::truncated`], but `None` when either axis is NaN or
    /// infinite.
    pub fn try_truncated(x: f64, y: f64) -> Option<Self> {
        if x.is_finite() && y.is_finite() {
            Some(Self::truncated(x, y))
        } else {
            None
        }
    }

    /// True when the subject has never been placed.
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

/// One subject card as stored in `subjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// Hex color such as `#2ecc71`.
    pub color: String,
    /// Symbolic icon name resolved by the rendering host.
    pub icon: String,
    /// Free-text schedule label.
    pub schedule: String,
    pub position: Position,
}
