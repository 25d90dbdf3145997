//! Trigonometric point placement around a center.

use serde::{Deserialize, Serialize};

/// Phase offset, in degrees, applied to every angle of a shifted board.
pub const SHIFT_DEGREES: f64 = -18.0;

/// A point in board coordinates. The y axis points down, as on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when both coordinates are within `epsilon` of `other`.
    pub fn approx_eq(&self, other: Position, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

/// Place a point `radius` away from `center` at `angle` degrees.
///
/// With `shift` the angle is additionally rotated by [`SHIFT_DEGREES`] before
/// taking cosine and sine, which gives the alternate board orientation.
pub fn place(center: Position, radius: f64, angle: f64, shift: bool) -> Position {
    let mut radians = angle.to_radians();
    if shift {
        radians += SHIFT_DEGREES.to_radians();
    }

    Position {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}
