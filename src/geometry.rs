//! Joint geometry on normalized image coordinates.
//!
//! Pure functions. Degenerate input (coincident or non-finite points) is
//! not guarded: it yields whatever the arithmetic produces, NaN included.

use std::f32::consts::PI;

use crate::{Landmark, Point};

/// Visibility at or above which a landmark counts as detected.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Angle in degrees at vertex `b` between rays b→a and b→c, in [0, 180].
///
/// Uses the difference of the two ray headings rather than a dot product,
/// so coincident points give 0° instead of being rejected.
pub fn angle_at(a: Point, b: Point, c: Point) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = (radians * 180.0 / PI).abs();

    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Component-wise average. Depth is kept only when both points carry it.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
        z: match (a.z, b.z) {
            (Some(za), Some(zb)) => Some((za + zb) / 2.0),
            _ => None,
        },
    }
}

/// Euclidean distance. Depth contributes only when both points carry it.
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = match (a.z, b.z) {
        (Some(za), Some(zb)) => za - zb,
        _ => 0.0,
    };
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// A landmark without a visibility score is treated as fully visible.
pub fn is_visible(landmark: &Landmark, threshold: f32) -> bool {
    landmark.visibility.unwrap_or(1.0) >= threshold
}
