use crate::core::error::{ConfigError, Result};
use crate::domain::quantity::Quantity;

use super::Simulation;

pub(super) fn set_paused(sim: &mut Simulation, paused: bool) {
    sim.paused = paused;
}

pub(super) fn set_quantity(sim: &mut Simulation, quantity: Quantity) {
    sim.quantity = quantity;
}

pub(super) fn set_steps_per_frame(sim: &mut Simulation, steps: u32) -> Result<()> {
    if steps == 0 {
        return Err(ConfigError::ZeroStepsPerFrame);
    }
    sim.params.steps_per_frame = steps;
    Ok(())
}

pub(super) fn set_pixels_per_cell(sim: &mut Simulation, pixels_per_cell: f32) -> Result<()> {
    if !pixels_per_cell.is_finite() || pixels_per_cell <= 0.0 {
        return Err(ConfigError::InvalidPixelsPerCell(pixels_per_cell));
    }
    sim.pixels_per_cell = pixels_per_cell;
    // Old baseline was in the previous scale
    sim.drag.reset();
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut Simulation, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats = Default::default();
    }
}
