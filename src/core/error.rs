//! Error types for configuration and lattice (re)initialization.
//!
//! Numerical divergence is not an error: it is detected and recovered by the
//! stability monitor. Only invalid input is reported here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: u32, height: u32, min: u32 },

    #[error("grid of {width}x{height} cells exceeds the {max} cell limit")]
    GridTooLarge { width: u32, height: u32, max: usize },

    #[error("viscosity must be positive and finite, got {0}")]
    InvalidViscosity(f32),

    #[error("flow velocity must be finite, got {0}")]
    InvalidVelocity(f32),

    #[error("steps per frame must be at least 1")]
    ZeroStepsPerFrame,

    #[error("pixels per cell must be positive and finite, got {0}")]
    InvalidPixelsPerCell(f32),

    #[error("unknown barrier shape index {0}")]
    UnknownBarrierShape(u8),

    #[error("unknown display quantity index {0}")]
    UnknownQuantity(u8),

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
