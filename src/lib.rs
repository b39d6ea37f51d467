//! Real-time exercise form analysis.
//!
//! Turns a stream of per-frame body landmarks into a repetition phase,
//! automatic rep counting and a set of named technique defects for squats
//! and deadlifts. The optional `python` feature exposes the workout session
//! as a Python class.

use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod geometry;
pub mod issues;
pub mod landmarks;
pub mod pose;
pub mod session;
pub mod tracker;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use issues::{FormIssue, IssueSet};
pub use landmarks::Frame;
pub use pose::{analyze, analyze_deadlift, analyze_squat, Exercise, FormAnalysis, JointAngles, Phase};
pub use session::{
    FeedbackThrottle, FrameReport, RepOutcome, SessionAggregator, SessionSummary, WorkoutSession,
};
pub use tracker::{PhaseTracker, ReferenceAngle};

/// Normalized image-space coordinate. `y` grows downward, `z` is optional depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y, z: None }
    }

    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Point { x, y, z: Some(z) }
    }
}

/// One labeled body part as reported by the pose estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    /// Detection confidence in [0, 1]. `None` counts as fully visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    /// Stand-in for a body part the estimator did not report.
    pub const MISSING: Landmark = Landmark {
        x: 0.0,
        y: 0.0,
        z: None,
        visibility: Some(0.0),
    };

    pub const fn new(x: f32, y: f32, visibility: f32) -> Self {
        Landmark {
            x,
            y,
            z: None,
            visibility: Some(visibility),
        }
    }

    pub fn point(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

#[cfg(feature = "python")]
mod python {
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    use crate::{EngineConfig, FormIssue, Landmark, WorkoutSession};

    #[pyclass(module = "form_engine")]
    pub struct FormEngine {
        session: WorkoutSession,
    }

    #[pymethods]
    impl FormEngine {
        #[new]
        #[pyo3(signature = (exercise, config_path=None))]
        pub fn new(exercise: &str, config_path: Option<&str>) -> PyResult<Self> {
            let mut config = match config_path {
                Some(path) => EngineConfig::load(path)
                    .map_err(|e| PyRuntimeError::new_err(format!("Failed to load config: {}", e)))?,
                None => EngineConfig::default(),
            };
            config.exercise = exercise.to_string();

            let session = WorkoutSession::from_config(&config)
                .map_err(|e| PyValueError::new_err(e.to_string()))?;

            Ok(FormEngine { session })
        }

        /// Analyze one frame of landmark dicts (`x`, `y`, optional `z` and
        /// `visibility`). Returns `None` when the frame was filtered out.
        pub fn process_frame(&mut self, py: Python<'_>, frame: &Bound<'_, PyAny>) -> PyResult<PyObject> {
            let landmarks: Vec<Landmark> = pythonize::depythonize(frame)
                .map_err(|e| PyValueError::new_err(format!("Malformed landmarks: {}", e)))?;

            match self.session.process(&landmarks) {
                Some(report) => pythonize::pythonize(py, &report)
                    .map(|bound| bound.unbind())
                    .map_err(|e| PyValueError::new_err(e.to_string())),
                None => Ok(py.None()),
            }
        }

        pub fn get_summary(&self, py: Python<'_>) -> PyResult<PyObject> {
            pythonize::pythonize(py, &self.session.summary())
                .map(|bound| bound.unbind())
                .map_err(|e| PyValueError::new_err(e.to_string()))
        }

        pub fn reset_session(&mut self) {
            self.session.reset();
        }

        #[staticmethod]
        pub fn feedback_phrase(issue: &str) -> PyResult<&'static str> {
            issue
                .parse::<FormIssue>()
                .map(|issue| issue.phrase())
                .map_err(|e| PyValueError::new_err(e.to_string()))
        }
    }

    #[pymodule]
    fn form_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<FormEngine>()?;
        Ok(())
    }
}
