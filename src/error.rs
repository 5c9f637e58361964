//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A length, radius or speed that must be strictly positive
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// A gap or offset that must be zero or more
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// A factor or velocity that must be a real number
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// Launch velocity with no vertical component
    #[error("ball_start_velocity ({dx}, {dy}) needs a nonzero dy")]
    StalledBall { dx: f32, dy: f32 },

    /// A counter that must be at least one
    #[error("{0} must be at least 1")]
    Zero(&'static str),

    /// Paddle cannot fit inside the playfield
    #[error("paddle width {paddle} exceeds playfield width {playfield}")]
    PaddleTooWide { paddle: f32, playfield: f32 },

    /// Paddle would sit on or below the floor
    #[error("paddle_bottom_gap {gap} must be less than height {height}")]
    PaddleOffField { gap: f32, height: f32 },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
