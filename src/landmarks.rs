//! Body-part index table (MediaPipe Pose, 33 landmarks) and frame access.
//!
//! Only shoulders, hips, knees and ankles are read by the analyzers; the
//! rest of the table is kept so callers can address frames by name.

use crate::geometry::{self, midpoint};
use crate::{Landmark, Point};

// ============================================================================
// LANDMARK INDICES
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_EYE_INNER: usize = 1;
pub const LEFT_EYE: usize = 2;
pub const LEFT_EYE_OUTER: usize = 3;
pub const RIGHT_EYE_INNER: usize = 4;
pub const RIGHT_EYE: usize = 5;
pub const RIGHT_EYE_OUTER: usize = 6;
pub const LEFT_EAR: usize = 7;
pub const RIGHT_EAR: usize = 8;
pub const MOUTH_LEFT: usize = 9;
pub const MOUTH_RIGHT: usize = 10;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_PINKY: usize = 17;
pub const RIGHT_PINKY: usize = 18;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_THUMB: usize = 21;
pub const RIGHT_THUMB: usize = 22;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

pub const LANDMARK_COUNT: usize = 33;

/// Landmarks the form analyzers depend on.
pub const CORE_LANDMARKS: [usize; 8] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
];

// ============================================================================
// FRAME ACCESS
// ============================================================================

/// Read-only view over one frame of landmarks.
///
/// Indices past the end of the slice read as [`Landmark::MISSING`], so a
/// short frame degrades instead of aborting analysis.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    landmarks: &'a [Landmark],
}

impl<'a> Frame<'a> {
    pub fn new(landmarks: &'a [Landmark]) -> Self {
        Frame { landmarks }
    }

    pub fn get(&self, index: usize) -> Landmark {
        self.landmarks
            .get(index)
            .copied()
            .unwrap_or(Landmark::MISSING)
    }

    pub fn point(&self, index: usize) -> Point {
        self.get(index).point()
    }

    /// Midpoint of a left/right pair. Visibility is ignored.
    pub fn midpoint(&self, left: usize, right: usize) -> Point {
        midpoint(self.point(left), self.point(right))
    }

    /// True when every core landmark clears `threshold`.
    pub fn is_trackable(&self, threshold: f32) -> bool {
        CORE_LANDMARKS
            .iter()
            .all(|&index| geometry::is_visible(&self.get(index), threshold))
    }
}
