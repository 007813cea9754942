use crate::core::error::Result;
use crate::domain::params::SimulationParameters;
use crate::domain::quantity::Quantity;
use crate::spatial::lattice::Lattice;
use crate::systems::interaction::DragTracker;

use super::perf_stats::PerfStats;
use super::render_extract::FrameBuffers;
use super::{Simulation, DEFAULT_PIXELS_PER_CELL};

pub(super) fn create_simulation(width: u32, height: u32, params: SimulationParameters) -> Result<Simulation> {
    let lattice = Lattice::new(width, height, &params)?;
    let size = lattice.size();

    let mut sim = Simulation {
        lattice,
        params,
        drag: DragTracker::new(),
        pixels_per_cell: DEFAULT_PIXELS_PER_CELL,
        paused: false,
        quantity: Quantity::default(),
        frames: FrameBuffers::new(size),
        substeps: 0,
        frame: 0,
        divergences: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    // Present the initial flow so the renderer never sees an empty frame
    sim.render();
    Ok(sim)
}

/// Rebuild the lattice and image at a new size. Display settings survive;
/// counters and the drag baseline start over.
pub(super) fn reinitialize(
    sim: &mut Simulation,
    width: u32,
    height: u32,
    params: SimulationParameters,
) -> Result<()> {
    let lattice = Lattice::new(width, height, &params)?;

    sim.frames = FrameBuffers::new(lattice.size());
    sim.lattice = lattice;
    sim.params = params;
    sim.drag.reset();
    sim.substeps = 0;
    sim.frame = 0;
    sim.divergences = 0;
    sim.perf_stats = PerfStats::default();

    log::debug!(
        "simulation reconfigured: {}x{} steps/frame={}",
        width,
        height,
        params.steps_per_frame
    );
    sim.render();
    Ok(())
}
