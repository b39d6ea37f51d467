/// Result type for boundary operations (tag parsing, config loading).
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised at the engine boundary. Per-frame analysis never fails.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("unknown exercise: {0:?} (expected \"squat\" or \"deadlift\")")]
    UnknownExercise(String),

    #[error("unknown form issue: {0:?}")]
    UnknownIssue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
