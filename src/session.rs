//! Workout-level bookkeeping on top of the per-frame analyzers.
//!
//! - `SessionAggregator`: rep totals, good/bad split, distinct issues
//! - `FeedbackThrottle`: at most one spoken cue per frame, per-issue cooldown
//! - `WorkoutSession`: owns one tracker + aggregator + throttle per workout

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::issues::{FormIssue, IssueSet};
use crate::landmarks::Frame;
use crate::pose::{analyze, Exercise, FormAnalysis};
use crate::tracker::PhaseTracker;
use crate::Landmark;

/// Quality verdict for one finished repetition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepOutcome {
    /// 1-based rep number within the session
    pub number: u32,
    pub good_form: bool,
    /// Every issue seen since the previous rep boundary
    pub issues: IssueSet,
}

/// Accumulates rep counts from per-frame analyses.
///
/// A rep is bad if any issue showed up on any frame since the previous rep
/// boundary, not only on the completing frame. `total == good + bad` always.
#[derive(Clone, Debug, Default)]
pub struct SessionAggregator {
    total_reps: u32,
    good_reps: u32,
    bad_reps: u32,
    rep_issues: IssueSet,
    session_issues: IssueSet,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame in. Returns the verdict when the frame closed a rep.
    pub fn record(&mut self, analysis: &FormAnalysis) -> Option<RepOutcome> {
        self.rep_issues.extend(analysis.issues.iter());

        if !analysis.rep_completed {
            return None;
        }

        self.total_reps += 1;
        let good_form = self.rep_issues.is_empty();
        if good_form {
            self.good_reps += 1;
        } else {
            self.bad_reps += 1;
            self.session_issues.extend(self.rep_issues.iter());
        }

        let outcome = RepOutcome {
            number: self.total_reps,
            good_form,
            issues: std::mem::take(&mut self.rep_issues),
        };
        log::debug!(
            "rep {} complete: {} ({} issues)",
            outcome.number,
            if good_form { "good" } else { "bad" },
            outcome.issues.len()
        );
        Some(outcome)
    }

    pub fn total_reps(&self) -> u32 {
        self.total_reps
    }

    pub fn good_reps(&self) -> u32 {
        self.good_reps
    }

    pub fn bad_reps(&self) -> u32 {
        self.bad_reps
    }

    /// Distinct issues from bad reps, in first-seen order.
    pub fn session_issues(&self) -> &IssueSet {
        &self.session_issues
    }

    /// Issues seen so far in the rep that hasn't finished yet.
    pub fn pending_issues(&self) -> &IssueSet {
        &self.rep_issues
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Limits how often the same cue is spoken.
#[derive(Clone, Debug)]
pub struct FeedbackThrottle {
    cooldown_frames: u64,
    frame: u64,
    last_cued: HashMap<FormIssue, u64>,
}

impl FeedbackThrottle {
    pub fn new(cooldown_frames: u32) -> Self {
        FeedbackThrottle {
            cooldown_frames: u64::from(cooldown_frames),
            frame: 0,
            last_cued: HashMap::new(),
        }
    }

    /// Advance one frame and pick the first issue that is off cooldown.
    pub fn next_cue(&mut self, issues: &IssueSet) -> Option<FormIssue> {
        let frame = self.frame;
        self.frame += 1;

        let cooldown = self.cooldown_frames;
        let issue = issues.iter().find(|issue| {
            self.last_cued
                .get(issue)
                .map_or(true, |&last| frame - last >= cooldown)
        })?;

        self.last_cued.insert(issue, frame);
        Some(issue)
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.last_cued.clear();
    }
}

/// Everything a consumer needs after one analyzed frame.
#[derive(Clone, Debug, Serialize)]
pub struct FrameReport {
    pub analysis: FormAnalysis,
    pub total_reps: u32,
    /// Set on the frame that closed a rep
    pub rep: Option<RepOutcome>,
    pub cue: Option<FormIssue>,
    pub cue_phrase: Option<&'static str>,
}

/// Serializable end-of-workout snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub exercise: Exercise,
    pub total_reps: u32,
    pub good_reps: u32,
    pub bad_reps: u32,
    pub issues: IssueSet,
    pub frames_analyzed: u64,
    pub frames_skipped: u64,
    /// good / total, 0 when no reps were completed
    pub form_score: f32,
}

/// One workout: the exercise, its tracker, aggregator and cue throttle.
#[derive(Debug)]
pub struct WorkoutSession {
    exercise: Exercise,
    min_visibility: f32,
    tracker: PhaseTracker,
    aggregator: SessionAggregator,
    throttle: FeedbackThrottle,
    frames_analyzed: u64,
    frames_skipped: u64,
}

impl WorkoutSession {
    pub fn new(exercise: Exercise, config: &EngineConfig) -> Self {
        log::info!("starting {} session", exercise);

        WorkoutSession {
            exercise,
            min_visibility: config.min_visibility,
            tracker: PhaseTracker::new(),
            aggregator: SessionAggregator::new(),
            throttle: FeedbackThrottle::new(config.feedback_cooldown_frames),
            frames_analyzed: 0,
            frames_skipped: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.exercise()?, config))
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    pub fn aggregator(&self) -> &SessionAggregator {
        &self.aggregator
    }

    /// Analyze one frame. Returns `None` if the visibility pre-filter is
    /// enabled and rejected the frame; the tracker is left untouched then.
    pub fn process(&mut self, landmarks: &[Landmark]) -> Option<FrameReport> {
        if self.min_visibility > 0.0 && !Frame::new(landmarks).is_trackable(self.min_visibility) {
            self.frames_skipped += 1;
            return None;
        }

        let analysis = analyze(self.exercise, landmarks, &mut self.tracker);
        self.frames_analyzed += 1;

        let rep = self.aggregator.record(&analysis);
        let cue = self.throttle.next_cue(&analysis.issues);

        Some(FrameReport {
            total_reps: self.aggregator.total_reps(),
            rep,
            cue,
            cue_phrase: cue.map(|issue| issue.phrase()),
            analysis,
        })
    }

    pub fn summary(&self) -> SessionSummary {
        let total = self.aggregator.total_reps();
        let form_score = if total == 0 {
            0.0
        } else {
            self.aggregator.good_reps() as f32 / total as f32
        };

        SessionSummary {
            exercise: self.exercise,
            total_reps: total,
            good_reps: self.aggregator.good_reps(),
            bad_reps: self.aggregator.bad_reps(),
            issues: self.aggregator.session_issues().clone(),
            frames_analyzed: self.frames_analyzed,
            frames_skipped: self.frames_skipped,
            form_score,
        }
    }

    /// Start over with the same exercise and settings.
    pub fn reset(&mut self) {
        log::info!(
            "resetting {} session after {} reps",
            self.exercise,
            self.aggregator.total_reps()
        );
        self.tracker.reset();
        self.aggregator.reset();
        self.throttle.reset();
        self.frames_analyzed = 0;
        self.frames_skipped = 0;
    }
}
