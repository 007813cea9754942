use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, Result};

/// Smallest grid that still has one interior cell.
pub const MIN_GRID_DIM: u32 = 3;

/// 2048x2048; keeps every plane addressable with a 32-bit `usize`.
pub const MAX_GRID_CELLS: usize = 1 << 22;

pub const DEFAULT_GRID_DIM: u32 = 128;
pub const DEFAULT_FLOW_VELOCITY: f32 = 0.1;
pub const DEFAULT_FLOW_VISCOSITY: f32 = 0.03;
pub const DEFAULT_STEPS_PER_FRAME: u32 = 3;

/// Obstacle painted into the tunnel on (re)initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarrierShape {
    #[default]
    Line,
    Circle,
}

impl BarrierShape {
    pub fn index(self) -> u8 {
        match self {
            BarrierShape::Line => 0,
            BarrierShape::Circle => 1,
        }
    }

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(BarrierShape::Line),
            1 => Ok(BarrierShape::Circle),
            other => Err(ConfigError::UnknownBarrierShape(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BarrierShape::Line => "Line",
            BarrierShape::Circle => "Circle",
        }
    }
}

/// Physical and pacing parameters of one simulation.
///
/// Changing velocity, viscosity or barrier shape requires a full lattice
/// re-initialization; `steps_per_frame` can be changed between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub flow_velocity: f32,
    pub flow_viscosity: f32,
    pub steps_per_frame: u32,
    pub barrier_shape: BarrierShape,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            flow_velocity: DEFAULT_FLOW_VELOCITY,
            flow_viscosity: DEFAULT_FLOW_VISCOSITY,
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            barrier_shape: BarrierShape::Line,
        }
    }
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<()> {
        if !self.flow_velocity.is_finite() {
            return Err(ConfigError::InvalidVelocity(self.flow_velocity));
        }
        // omega = 1 / (3*visc + 0.5) must stay in (0, 2)
        if !self.flow_viscosity.is_finite() || self.flow_viscosity <= 0.0 {
            return Err(ConfigError::InvalidViscosity(self.flow_viscosity));
        }
        if self.steps_per_frame == 0 {
            return Err(ConfigError::ZeroStepsPerFrame);
        }
        Ok(())
    }
}

/// Everything needed to build a simulation, as loaded from JSON.
///
/// Every field is optional; missing fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub flow_velocity: f32,
    pub flow_viscosity: f32,
    pub steps_per_frame: u32,
    pub barrier_shape: BarrierShape,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            width: DEFAULT_GRID_DIM,
            height: DEFAULT_GRID_DIM,
            flow_velocity: params.flow_velocity,
            flow_viscosity: params.flow_viscosity,
            steps_per_frame: params.steps_per_frame,
            barrier_shape: params.barrier_shape,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn params(&self) -> SimulationParameters {
        SimulationParameters {
            flow_velocity: self.flow_velocity,
            flow_viscosity: self.flow_viscosity,
            steps_per_frame: self.steps_per_frame,
            barrier_shape: self.barrier_shape,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        self.params().validate()
    }
}

pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width < MIN_GRID_DIM || height < MIN_GRID_DIM {
        return Err(ConfigError::GridTooSmall {
            width,
            height,
            min: MIN_GRID_DIM,
        });
    }
    match (width as usize).checked_mul(height as usize) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
        _ => Err(ConfigError::GridTooLarge {
            width,
            height,
            max: MAX_GRID_CELLS,
        }),
    }
}
