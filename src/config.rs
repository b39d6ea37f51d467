//! Workout session settings, loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::pose::Exercise;

/// Session settings. Biomechanical thresholds are fixed and not listed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// "squat" or "deadlift"
    pub exercise: String,
    /// Skip frames whose core landmarks fall below this visibility.
    /// 0 disables the filter and every frame is analyzed.
    pub min_visibility: f32,
    /// Frames before the same cue may be spoken again (~1.5s at 30 fps)
    pub feedback_cooldown_frames: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exercise: Exercise::Squat.as_str().to_string(),
            min_visibility: 0.0,
            feedback_cooldown_frames: 45,
        }
    }
}

impl EngineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn exercise(&self) -> Result<Exercise> {
        self.exercise.parse()
    }

    pub fn validate(&self) -> Result<()> {
        self.exercise()?;

        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(EngineError::InvalidConfig(format!(
                "min_visibility must be within [0, 1], got {}",
                self.min_visibility
            )));
        }

        Ok(())
    }
}
