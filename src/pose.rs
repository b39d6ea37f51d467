use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::geometry::angle_at;
use crate::issues::{FormIssue, IssueSet};
use crate::landmarks::{
    Frame, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
    RIGHT_SHOULDER,
};
use crate::tracker::PhaseTracker;
use crate::{Landmark, Point};

// Phase thresholds (degrees)
const STANDING_ANGLE: f32 = 165.0;
const SQUAT_BOTTOM_ANGLE: f32 = 100.0;
const DEADLIFT_BOTTOM_ANGLE: f32 = 110.0;

// Squat defects
const SQUAT_TOO_DEEP_ANGLE: f32 = 70.0;
const KNEE_ASYMMETRY_LIMIT: f32 = 0.05;
const FORWARD_LEAN_LIMIT: f32 = 45.0;
const KNEE_OVER_TOE_LIMIT: f32 = 0.15;

// Deadlift defects. Camera-angle dependent heuristics, kept as measured.
const ROUNDED_BACK_DROP: f32 = 0.30;
const KNEE_TRAVEL_LIMIT: f32 = 20.0;
const LOCKOUT_TOLERANCE: f32 = 5.0;

/// Position within one repetition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Standing,
    Descending, // eccentric
    Bottom,
    Ascending, // concentric
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Standing => "standing",
            Phase::Descending => "descending",
            Phase::Bottom => "bottom",
            Phase::Ascending => "ascending",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported exercises. Parsing is the only place an unknown tag can appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Squat,
    Deadlift,
}

impl Exercise {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Deadlift => "deadlift",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squat" => Ok(Exercise::Squat),
            "deadlift" => Ok(Exercise::Deadlift),
            other => Err(EngineError::UnknownExercise(other.to_string())),
        }
    }
}

/// Raw angles measured on one frame, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// hip-knee-ankle
    pub knee: f32,
    /// shoulder-hip-knee
    pub hip: f32,
    /// hip→shoulder against vertical
    pub torso: f32,
}

/// Per-frame analyzer output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormAnalysis {
    pub is_good_form: bool,
    pub issues: IssueSet,
    pub phase: Phase,
    /// True only on the frame that closes a repetition.
    pub rep_completed: bool,
    pub angles: JointAngles,
}

impl FormAnalysis {
    fn new(phase: Phase, issues: IssueSet, rep_completed: bool, angles: JointAngles) -> Self {
        FormAnalysis {
            is_good_form: issues.is_empty(),
            issues,
            phase,
            rep_completed,
            angles,
        }
    }
}

/// Bilateral midpoints plus the per-side knee and ankle positions.
#[derive(Clone, Copy, Debug)]
struct Body {
    shoulder: Point,
    hip: Point,
    knee: Point,
    ankle: Point,
    left_knee: Point,
    right_knee: Point,
    left_ankle: Point,
    right_ankle: Point,
}

impl Body {
    fn from_frame(frame: &Frame<'_>) -> Self {
        Body {
            shoulder: frame.midpoint(LEFT_SHOULDER, RIGHT_SHOULDER),
            hip: frame.midpoint(LEFT_HIP, RIGHT_HIP),
            knee: frame.midpoint(LEFT_KNEE, RIGHT_KNEE),
            ankle: frame.midpoint(LEFT_ANKLE, RIGHT_ANKLE),
            left_knee: frame.point(LEFT_KNEE),
            right_knee: frame.point(RIGHT_KNEE),
            left_ankle: frame.point(LEFT_ANKLE),
            right_ankle: frame.point(RIGHT_ANKLE),
        }
    }

    fn angles(&self) -> JointAngles {
        // Probe straight up from the hip (y grows downward)
        let above_hip = Point::new(self.hip.x, self.hip.y - 0.1);

        JointAngles {
            knee: angle_at(self.hip, self.knee, self.ankle),
            hip: angle_at(self.shoulder, self.hip, self.knee),
            torso: angle_at(self.shoulder, self.hip, above_hip),
        }
    }

    /// Difference between the left and right knee-over-ankle offsets.
    fn knee_asymmetry(&self) -> f32 {
        let left = self.left_knee.x - self.left_ankle.x;
        let right = self.right_knee.x - self.right_ankle.x;
        (left - right).abs()
    }
}

/// Analyze one frame with the algorithm for `exercise`.
pub fn analyze(exercise: Exercise, landmarks: &[Landmark], tracker: &mut PhaseTracker) -> FormAnalysis {
    match exercise {
        Exercise::Squat => analyze_squat(landmarks, tracker),
        Exercise::Deadlift => analyze_deadlift(landmarks, tracker),
    }
}

/// Squat: phase keyed off the knee angle.
pub fn analyze_squat(landmarks: &[Landmark], tracker: &mut PhaseTracker) -> FormAnalysis {
    let body = Body::from_frame(&Frame::new(landmarks));
    let angles = body.angles();
    let (phase, rep_completed) = squat_phase(tracker, angles.knee);

    let issues = squat_issues(phase, &angles, &body);

    log_transition(Exercise::Squat, tracker.phase, phase, angles.knee);
    tracker.record(Exercise::Squat, phase, angles.knee);

    FormAnalysis::new(phase, issues, rep_completed, angles)
}

/// Classify the squat phase from the knee angle and update rep state.
/// Returns the phase and whether this frame closed a rep.
fn squat_phase(tracker: &mut PhaseTracker, knee: f32) -> (Phase, bool) {
    let previous_knee = tracker.previous_angle(Exercise::Squat);
    let mut rep_completed = false;

    let phase = if knee >= STANDING_ANGLE {
        if tracker.bottom_reached && tracker.rep_in_progress {
            rep_completed = true;
            tracker.bottom_reached = false;
            tracker.rep_in_progress = false;
        }
        Phase::Standing
    } else if knee <= SQUAT_BOTTOM_ANGLE {
        tracker.bottom_reached = true;
        tracker.rep_in_progress = true;
        Phase::Bottom
    } else if knee < previous_knee {
        tracker.rep_in_progress = true;
        Phase::Descending
    } else {
        Phase::Ascending
    };

    (phase, rep_completed)
}

fn squat_issues(phase: Phase, angles: &JointAngles, body: &Body) -> IssueSet {
    let mut issues = IssueSet::new();

    if phase == Phase::Bottom {
        // Bottom is only entered at or below the bottom threshold, so the
        // shallow check can't fire from classification alone.
        if angles.knee > SQUAT_BOTTOM_ANGLE {
            issues.insert(FormIssue::NotDeepEnough);
        } else if angles.knee < SQUAT_TOO_DEEP_ANGLE {
            issues.insert(FormIssue::TooDeep);
        }
    }

    if phase != Phase::Standing {
        if body.knee_asymmetry() > KNEE_ASYMMETRY_LIMIT {
            issues.insert(FormIssue::KneesCaving);
        }
        if angles.torso > FORWARD_LEAN_LIMIT {
            issues.insert(FormIssue::ForwardLean);
        }
    }

    if matches!(phase, Phase::Bottom | Phase::Descending)
        && (body.knee.x - body.ankle.x).abs() > KNEE_OVER_TOE_LIMIT
    {
        issues.insert(FormIssue::KneesTooFarForward);
    }

    issues
}

/// Deadlift: phase keyed off the hip angle.
pub fn analyze_deadlift(landmarks: &[Landmark], tracker: &mut PhaseTracker) -> FormAnalysis {
    let body = Body::from_frame(&Frame::new(landmarks));
    let angles = body.angles();
    let (phase, rep_completed) = deadlift_phase(tracker, angles.hip, angles.knee);

    let issues = deadlift_issues(phase, &angles, &body, tracker.baseline_knee_angle);

    log_transition(Exercise::Deadlift, tracker.phase, phase, angles.hip);
    tracker.record(Exercise::Deadlift, phase, angles.hip);

    FormAnalysis::new(phase, issues, rep_completed, angles)
}

/// Classify the deadlift phase from the hip angle. The knee angle is
/// captured as the rep baseline on the first descending frame.
fn deadlift_phase(tracker: &mut PhaseTracker, hip: f32, knee: f32) -> (Phase, bool) {
    let previous_hip = tracker.previous_angle(Exercise::Deadlift);
    let mut rep_completed = false;

    let phase = if hip >= STANDING_ANGLE {
        if tracker.bottom_reached && tracker.rep_in_progress {
            rep_completed = true;
            tracker.bottom_reached = false;
            tracker.rep_in_progress = false;
            tracker.baseline_knee_angle = None;
        }
        Phase::Standing
    } else if hip <= DEADLIFT_BOTTOM_ANGLE {
        tracker.bottom_reached = true;
        tracker.rep_in_progress = true;
        Phase::Bottom
    } else if hip < previous_hip {
        if !tracker.rep_in_progress {
            tracker.rep_in_progress = true;
            tracker.baseline_knee_angle = Some(knee);
        }
        Phase::Descending
    } else {
        Phase::Ascending
    };

    (phase, rep_completed)
}

fn deadlift_issues(phase: Phase, angles: &JointAngles, body: &Body, baseline_knee: Option<f32>) -> IssueSet {
    let mut issues = IssueSet::new();

    if phase != Phase::Standing && body.shoulder.y - body.hip.y > ROUNDED_BACK_DROP {
        issues.insert(FormIssue::RoundedBack);
    }

    if phase == Phase::Ascending {
        if let Some(baseline) = baseline_knee {
            if (angles.knee - baseline).abs() > KNEE_TRAVEL_LIMIT {
                issues.insert(FormIssue::KneesTooFarForward);
            }
        }
    }

    // Standing needs hip >= STANDING_ANGLE, so this only fires if the
    // standing and lockout thresholds are ever brought closer together.
    if phase == Phase::Standing && angles.hip < STANDING_ANGLE - LOCKOUT_TOLERANCE {
        issues.insert(FormIssue::LockoutIncomplete);
    }

    issues
}

fn log_transition(exercise: Exercise, from: Phase, to: Phase, primary_angle: f32) {
    if from != to {
        log::trace!("{}: {} -> {} at {:.1}°", exercise, from, to, primary_angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::LANDMARK_COUNT;

    const SHIN: f32 = 0.2;
    const THIGH: f32 = 0.2;
    const TORSO: f32 = 0.25;

    /// Side-on body with a vertical shin. `knee` is the knee angle, `lean`
    /// the torso angle from vertical; the hip angle comes out as knee - lean.
    fn hinge(knee: f32, lean: f32) -> Vec<Landmark> {
        let ankle = (0.5, 0.9);
        let knee_pos = (ankle.0, ankle.1 - SHIN);
        let k = knee.to_radians();
        let hip = (knee_pos.0 - THIGH * k.sin(), knee_pos.1 + THIGH * k.cos());
        let l = lean.to_radians();
        let shoulder = (hip.0 + TORSO * l.sin(), hip.1 - TORSO * l.cos());
        body_frame(shoulder, hip, knee_pos, ankle)
    }

    fn body_frame(shoulder: (f32, f32), hip: (f32, f32), knee: (f32, f32), ankle: (f32, f32)) -> Vec<Landmark> {
        let mut landmarks = vec![Landmark::new(0.5, 0.1, 0.9); LANDMARK_COUNT];
        for (left, right, (x, y)) in [
            (LEFT_SHOULDER, RIGHT_SHOULDER, shoulder),
            (LEFT_HIP, RIGHT_HIP, hip),
            (LEFT_KNEE, RIGHT_KNEE, knee),
            (LEFT_ANKLE, RIGHT_ANKLE, ankle),
        ] {
            landmarks[left] = Landmark::new(x, y, 0.9);
            landmarks[right] = Landmark::new(x, y, 0.9);
        }
        landmarks
    }

    fn body(landmarks: &[Landmark]) -> Body {
        Body::from_frame(&Frame::new(landmarks))
    }

    fn run(exercise: Exercise, frames: &[Vec<Landmark>]) -> Vec<FormAnalysis> {
        let mut tracker = PhaseTracker::new();
        frames.iter().map(|f| analyze(exercise, f, &mut tracker)).collect()
    }

    #[test]
    fn test_hinge_builder_angles() {
        let angles = body(&hinge(120.0, 30.0)).angles();
        assert!((angles.knee - 120.0).abs() < 0.01);
        assert!((angles.hip - 90.0).abs() < 0.01);
        assert!((angles.torso - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_exercise_tag_parsing() {
        assert_eq!("squat".parse::<Exercise>().ok(), Some(Exercise::Squat));
        assert_eq!("deadlift".parse::<Exercise>().ok(), Some(Exercise::Deadlift));
        assert!(matches!(
            "bench".parse::<Exercise>(),
            Err(EngineError::UnknownExercise(tag)) if tag == "bench"
        ));
        assert!("Squat".parse::<Exercise>().is_err());
    }

    #[test]
    fn test_squat_phase_cycle() {
        let knees = [180.0, 172.0, 160.0, 145.0, 130.0, 115.0, 95.0, 80.0, 95.0, 115.0, 130.0, 145.0, 160.0, 172.0, 180.0];
        let frames: Vec<_> = knees.iter().map(|&k| hinge(k, 0.0)).collect();
        let results = run(Exercise::Squat, &frames);

        let phases: Vec<Phase> = results.iter().map(|r| r.phase).collect();
        use Phase::*;
        assert_eq!(
            phases,
            vec![
                Standing, Standing, Descending, Descending, Descending, Descending, Bottom, Bottom,
                Bottom, Ascending, Ascending, Ascending, Ascending, Standing, Standing
            ]
        );

        let completed: Vec<usize> = results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.rep_completed)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(completed, vec![13]);
        assert!(results.iter().all(|r| r.is_good_form == r.issues.is_empty()));
        assert!(results.iter().all(|r| r.is_good_form));
    }

    #[test]
    fn test_shallow_squat_never_counts() {
        let knees = [180.0, 170.0, 160.0, 152.0, 160.0, 170.0, 180.0, 160.0, 152.0, 170.0];
        let frames: Vec<_> = knees.iter().map(|&k| hinge(k, 0.0)).collect();
        let results = run(Exercise::Squat, &frames);

        assert!(results.iter().all(|r| r.phase != Phase::Bottom));
        assert!(results.iter().all(|r| !r.rep_completed));
    }

    #[test]
    fn test_squat_depth_checks() {
        let shallow = hinge(120.0, 0.0);
        let issues = squat_issues(Phase::Bottom, &body(&shallow).angles(), &body(&shallow));
        assert!(issues.contains(FormIssue::NotDeepEnough));
        assert!(!issues.contains(FormIssue::TooDeep));

        let deep = hinge(60.0, 0.0);
        let issues = squat_issues(Phase::Bottom, &body(&deep).angles(), &body(&deep));
        assert!(issues.contains(FormIssue::TooDeep));
        assert!(!issues.contains(FormIssue::NotDeepEnough));

        // Through the analyzer a 60° knee is classified as bottom
        let mut tracker = PhaseTracker::new();
        let result = analyze_squat(&deep, &mut tracker);
        assert_eq!(result.phase, Phase::Bottom);
        assert!(result.issues.contains(FormIssue::TooDeep));
        assert!(!result.is_good_form);
    }

    #[test]
    fn test_squat_forward_lean_outside_standing() {
        let mut tracker = PhaseTracker::new();
        // Knee 150, torso 50° from vertical
        let result = analyze_squat(&hinge(150.0, 50.0), &mut tracker);
        assert_eq!(result.phase, Phase::Descending);
        assert!(result.issues.contains(FormIssue::ForwardLean));

        let mut tracker = PhaseTracker::new();
        let result = analyze_squat(&hinge(178.0, 50.0), &mut tracker);
        assert_eq!(result.phase, Phase::Standing);
        assert!(result.is_good_form);
    }

    #[test]
    fn test_squat_knees_caving() {
        let mut landmarks = hinge(140.0, 0.0);
        landmarks[LEFT_KNEE].x += 0.04;
        landmarks[RIGHT_KNEE].x -= 0.04;

        let mut tracker = PhaseTracker::new();
        let result = analyze_squat(&landmarks, &mut tracker);
        assert_eq!(result.phase, Phase::Descending);
        assert_eq!(result.issues.as_slice(), &[FormIssue::KneesCaving]);
    }

    #[test]
    fn test_squat_knees_past_ankles() {
        let landmarks = body_frame((0.45, 0.35), (0.45, 0.6), (0.7, 0.65), (0.5, 0.9));
        let b = body(&landmarks);
        let issues = squat_issues(Phase::Descending, &b.angles(), &b);
        assert!(issues.contains(FormIssue::KneesTooFarForward));

        let issues = squat_issues(Phase::Ascending, &b.angles(), &b);
        assert!(!issues.contains(FormIssue::KneesTooFarForward));
    }

    #[test]
    fn test_squat_stores_knee_angle() {
        let mut tracker = PhaseTracker::new();
        analyze_squat(&hinge(140.0, 20.0), &mut tracker);
        assert!((tracker.previous_angle(Exercise::Squat) - 140.0).abs() < 0.01);
        assert_eq!(tracker.phase, Phase::Descending);
        assert!(tracker.rep_in_progress);
    }

    #[test]
    fn test_deadlift_rep_and_baseline() {
        // (knee, lean): hip angle = knee - lean
        let poses = [
            (178.0, 0.0),  // hip 178 standing
            (170.0, 20.0), // hip 150 descending, baseline knee 170
            (155.0, 50.0), // hip 105 bottom
            (165.0, 30.0), // hip 135 ascending
            (175.0, 5.0),  // hip 170 standing, rep done
        ];
        let frames: Vec<_> = poses.iter().map(|&(k, l)| hinge(k, l)).collect();
        let mut tracker = PhaseTracker::new();
        let mut results = Vec::new();

        for (i, frame) in frames.iter().enumerate() {
            results.push(analyze_deadlift(frame, &mut tracker));
            if i == 1 {
                let baseline = tracker.baseline_knee_angle.unwrap_or(f32::NAN);
                assert!((baseline - 170.0).abs() < 0.01);
            }
        }

        let phases: Vec<Phase> = results.iter().map(|r| r.phase).collect();
        assert_eq!(
            phases,
            vec![Phase::Standing, Phase::Descending, Phase::Bottom, Phase::Ascending, Phase::Standing]
        );
        assert!(results[4].rep_completed);
        assert!(results.iter().all(|r| r.is_good_form));
        assert_eq!(tracker.baseline_knee_angle, None);
        assert!((tracker.previous_angle(Exercise::Deadlift) - 170.0).abs() < 0.01);
    }

    #[test]
    fn test_deadlift_knee_travel_on_ascent() {
        let mut tracker = PhaseTracker::new();
        analyze_deadlift(&hinge(170.0, 20.0), &mut tracker); // baseline 170
        analyze_deadlift(&hinge(155.0, 50.0), &mut tracker); // bottom
        let result = analyze_deadlift(&hinge(140.0, 10.0), &mut tracker); // hip 130, knee moved 30°

        assert_eq!(result.phase, Phase::Ascending);
        assert_eq!(result.issues.as_slice(), &[FormIssue::KneesTooFarForward]);
    }

    #[test]
    fn test_deadlift_lockout_check() {
        let mut angles = body(&hinge(175.0, 20.0)).angles();
        let b = body(&hinge(175.0, 20.0));

        angles.hip = 155.0;
        assert!(deadlift_issues(Phase::Standing, &angles, &b, None).contains(FormIssue::LockoutIncomplete));

        angles.hip = 168.0;
        assert!(!deadlift_issues(Phase::Standing, &angles, &b, None).contains(FormIssue::LockoutIncomplete));
    }

    #[test]
    fn test_deadlift_rounded_back() {
        // Shoulders hanging well below the hips
        let landmarks = body_frame((0.8, 0.75), (0.45, 0.4), (0.5, 0.7), (0.5, 0.9));
        let b = body(&landmarks);
        assert!(deadlift_issues(Phase::Bottom, &b.angles(), &b, None).contains(FormIssue::RoundedBack));
        assert!(!deadlift_issues(Phase::Standing, &b.angles(), &b, None).contains(FormIssue::RoundedBack));
    }

    #[test]
    fn test_all_invisible_frame_does_not_panic() {
        let blank = vec![Landmark::MISSING; LANDMARK_COUNT];
        for exercise in [Exercise::Squat, Exercise::Deadlift] {
            let mut tracker = PhaseTracker::new();
            let result = analyze(exercise, &blank, &mut tracker);
            assert_eq!(result.is_good_form, result.issues.is_empty());
            assert!(!result.rep_completed);
        }

        let mut tracker = PhaseTracker::new();
        let result = analyze(Exercise::Squat, &[], &mut tracker);
        assert_eq!(result.angles.knee, 0.0);
    }

    #[test]
    fn test_squat_phase_boundaries() {
        let mut tracker = PhaseTracker::new();
        assert_eq!(squat_phase(&mut tracker, 165.0).0, Phase::Standing);
        assert_eq!(squat_phase(&mut tracker, 164.9).0, Phase::Descending);
        assert_eq!(squat_phase(&mut tracker, 100.1).0, Phase::Descending);
        assert_eq!(squat_phase(&mut tracker, 100.0).0, Phase::Bottom);
        assert!(tracker.bottom_reached);

        // Rising but still above the bottom threshold
        tracker.record(Exercise::Squat, Phase::Bottom, 100.0);
        assert_eq!(squat_phase(&mut tracker, 164.9), (Phase::Ascending, false));
        tracker.record(Exercise::Squat, Phase::Ascending, 164.9);
        assert_eq!(squat_phase(&mut tracker, 165.0), (Phase::Standing, true));
        assert!(!tracker.bottom_reached && !tracker.rep_in_progress);
    }

    #[test]
    fn test_deadlift_phase_boundaries() {
        let mut tracker = PhaseTracker::new();
        assert_eq!(deadlift_phase(&mut tracker, 165.0, 175.0).0, Phase::Standing);
        assert_eq!(deadlift_phase(&mut tracker, 164.9, 172.0).0, Phase::Descending);
        assert_eq!(tracker.baseline_knee_angle, Some(172.0));

        tracker.record(Exercise::Deadlift, Phase::Descending, 112.0);
        assert_eq!(deadlift_phase(&mut tracker, 111.0, 165.0).0, Phase::Descending);
        assert_eq!(deadlift_phase(&mut tracker, 110.1, 165.0).0, Phase::Descending);
        assert!(!tracker.bottom_reached);
        assert_eq!(deadlift_phase(&mut tracker, 110.0, 165.0).0, Phase::Bottom);
        assert!(tracker.bottom_reached);

        assert_eq!(deadlift_phase(&mut tracker, 165.0, 175.0), (Phase::Standing, true));
        assert_eq!(tracker.baseline_knee_angle, None);
    }

    #[test]
    fn test_shallow_deadlift_never_counts() {
        // Deepest hip angle is 115°, short of the 110° bottom
        let poses = [(178.0, 0.0), (170.0, 20.0), (160.0, 45.0), (170.0, 10.0), (175.0, 5.0)];
        let frames: Vec<_> = poses.iter().map(|&(k, l)| hinge(k, l)).collect();
        let results = run(Exercise::Deadlift, &frames);

        assert_eq!(results[2].phase, Phase::Descending);
        assert!(results.iter().all(|r| r.phase != Phase::Bottom));
        assert!(results.iter().all(|r| !r.rep_completed));
    }
}
