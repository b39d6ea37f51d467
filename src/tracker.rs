//! Cross-frame memory for one workout session.

use serde::{Deserialize, Serialize};

use crate::pose::{Exercise, Phase};

/// Angle assumed before any frame has been analyzed (fully extended).
pub const INITIAL_REFERENCE_ANGLE: f32 = 180.0;

/// Previous-frame value of the angle that drives phase classification.
///
/// Tagged by joint so a squat tracker can't silently feed a hip angle to the
/// knee comparison (or the reverse).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "joint", content = "degrees")]
pub enum ReferenceAngle {
    Initial,
    /// Squat: knee angle
    Knee(f32),
    /// Deadlift: hip angle
    Hip(f32),
}

impl ReferenceAngle {
    pub fn for_exercise(exercise: Exercise, degrees: f32) -> Self {
        match exercise {
            Exercise::Squat => ReferenceAngle::Knee(degrees),
            Exercise::Deadlift => ReferenceAngle::Hip(degrees),
        }
    }
}

/// Session-scoped state mutated once per analyzed frame.
///
/// One tracker per workout; not safe for concurrent mutation, callers
/// serialize access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTracker {
    pub phase: Phase,
    pub reference: ReferenceAngle,
    pub rep_in_progress: bool,
    pub bottom_reached: bool,
    /// Knee angle captured when a deadlift rep starts.
    pub baseline_knee_angle: Option<f32>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        PhaseTracker {
            phase: Phase::Standing,
            reference: ReferenceAngle::Initial,
            rep_in_progress: false,
            bottom_reached: false,
            baseline_knee_angle: None,
        }
    }

    /// Previous primary angle for `exercise`.
    ///
    /// A value recorded by the other exercise reads as the initial angle.
    pub fn previous_angle(&self, exercise: Exercise) -> f32 {
        match (self.reference, exercise) {
            (ReferenceAngle::Initial, _) => INITIAL_REFERENCE_ANGLE,
            (ReferenceAngle::Knee(degrees), Exercise::Squat) => degrees,
            (ReferenceAngle::Hip(degrees), Exercise::Deadlift) => degrees,
            (other, _) => {
                log::warn!(
                    "tracker holds {:?} but is analyzing {}; treating previous angle as {}",
                    other,
                    exercise,
                    INITIAL_REFERENCE_ANGLE
                );
                INITIAL_REFERENCE_ANGLE
            }
        }
    }

    pub fn record(&mut self, exercise: Exercise, phase: Phase, primary_angle: f32) {
        self.phase = phase;
        self.reference = ReferenceAngle::for_exercise(exercise, primary_angle);
    }

    pub fn reset(&mut self) {
        *self = PhaseTracker::new();
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
