/// Error returned when building components from configuration.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// The configuration blob is not valid JSON for [`crate::config::MotionConfig`].
    #[error("invalid motion config: {0}")]
    Json(#[from] serde_json::Error),
    /// A duration or speed was zero, negative, or not finite.
    #[error("{field} must be a positive number of milliseconds, got {value}")]
    InvalidDuration { field: &'static str, value: f64 },
    /// A visibility threshold fell outside `[0, 1]`.
    #[error("{field} must be within 0.0..=1.0, got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },
    /// The phrase cycler was given nothing to type.
    #[error("phrase list is empty")]
    NoPhrases,
    /// A phrase with no characters would never finish typing.
    #[error("phrase {index} is empty")]
    EmptyPhrase { index: usize },
    /// `log_level` is not one of the `log` crate's level names.
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}
