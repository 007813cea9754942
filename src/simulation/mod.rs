//! Simulation - frame driver around one lattice
//!
//! Owns the lattice, its parameters, the drag tracker, the double-buffered
//! image and the counters. One call to `advance_frame` runs
//! `steps_per_frame` sub-steps of boundary → collision → streaming → drag,
//! then the stability check. Rendering is separate so a paused simulation
//! can still be redrawn.

use crate::core::error::Result;
use crate::domain::params::{BarrierShape, SimulationConfig, SimulationParameters};
use crate::domain::quantity::Quantity;
use crate::spatial::lattice::Lattice;
use crate::systems::interaction::{DragIntent, DragTracker, PointerSample};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{FluidSim, ImageLayout};
pub use perf_stats::PerfStats;
pub use render_extract::FrameBuffers;

use perf_timer::PerfTimer;

/// Default pointer-to-cell scale: one image pixel per lattice cell
pub const DEFAULT_PIXELS_PER_CELL: f32 = 1.0;

/// What `advance_frame` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Paused,
    Advanced,
    /// Sub-steps ran but the flow diverged and was reset
    Recovered,
}

impl FrameOutcome {
    pub fn code(self) -> u8 {
        match self {
            FrameOutcome::Paused => 0,
            FrameOutcome::Advanced => 1,
            FrameOutcome::Recovered => 2,
        }
    }
}

/// Read-only snapshot for overlays (force arrow, counters)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Diagnostics {
    pub barrier_count: u32,
    pub barrier_fx: f32,
    pub barrier_fy: f32,
    pub barrier_centroid: Option<(f32, f32)>,
    pub divergences: u32,
    pub substeps: u64,
    pub frames: u64,
}

pub(crate) struct ImageLayoutData {
    pub(crate) ptr: *const u32,
    pub(crate) len_elements: usize,
    pub(crate) len_bytes: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

pub struct Simulation {
    lattice: Lattice,
    params: SimulationParameters,
    drag: DragTracker,
    pixels_per_cell: f32,

    // Display
    paused: bool,
    quantity: Quantity,
    frames: FrameBuffers,

    // Counters
    substeps: u64,
    frame: u64,
    divergences: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    pub fn new(width: u32, height: u32, params: SimulationParameters) -> Result<Self> {
        init::create_simulation(width, height, params)
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.width, config.height, config.params())
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        let config = SimulationConfig::from_json(json)?;
        Self::new(config.width, config.height, config.params())
    }

    /// Full re-initialization with new size and parameters.
    /// Invalid input leaves the current simulation untouched.
    pub fn reconfigure(&mut self, width: u32, height: u32, params: SimulationParameters) -> Result<()> {
        init::reinitialize(self, width, height, params)
    }

    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.width() as u32,
            height: self.height() as u32,
            flow_velocity: self.params.flow_velocity,
            flow_viscosity: self.params.flow_viscosity,
            steps_per_frame: self.params.steps_per_frame,
            barrier_shape: self.params.barrier_shape,
        }
    }

    pub fn width(&self) -> usize { self.lattice.width() }

    pub fn height(&self) -> usize { self.lattice.height() }

    pub fn params(&self) -> &SimulationParameters { &self.params }

    pub fn lattice(&self) -> &Lattice { &self.lattice }

    /// Direct access for embedders painting custom obstacles or probes
    pub fn lattice_mut(&mut self) -> &mut Lattice { &mut self.lattice }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn substeps(&self) -> u64 { self.substeps }

    pub fn divergences(&self) -> u32 { self.divergences }

    // === Settings ===

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn is_paused(&self) -> bool { self.paused }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        settings::set_quantity(self, quantity);
    }

    pub fn quantity(&self) -> Quantity { self.quantity }

    /// Step to the next display quantity, wrapping after curl
    pub fn cycle_quantity(&mut self) -> Quantity {
        settings::set_quantity(self, self.quantity.next());
        self.quantity
    }

    pub fn set_steps_per_frame(&mut self, steps: u32) -> Result<()> {
        settings::set_steps_per_frame(self, steps)
    }

    pub fn pixels_per_cell(&self) -> f32 { self.pixels_per_cell }

    pub fn set_pixels_per_cell(&mut self, pixels_per_cell: f32) -> Result<()> {
        settings::set_pixels_per_cell(self, pixels_per_cell)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === Obstacles & fluid ===

    pub fn set_barrier(&mut self, x: isize, y: isize, solid: bool) -> bool {
        self.lattice.set_barrier(x, y, solid)
    }

    pub fn clear_barriers(&mut self) {
        self.lattice.clear_barriers();
    }

    /// Repaint one of the preset shapes without resetting the flow
    pub fn paint_barrier(&mut self, shape: BarrierShape) {
        self.lattice.paint_barrier(shape);
    }

    pub fn reset_fluid(&mut self) {
        self.lattice.reset_fluid();
    }

    // === Stepping ===

    /// Run one display frame's worth of sub-steps
    pub fn advance_frame(&mut self, sample: PointerSample) -> FrameOutcome {
        step::advance_frame(self, sample)
    }

    /// One boundary → collision → streaming → drag pass
    pub fn substep(&mut self, drag: Option<&DragIntent>) {
        step::substep(self, drag);
    }

    // === Rendering ===

    /// Project the selected quantity into the back buffer and present it
    pub fn render(&mut self) {
        render_extract::render(self);
    }

    /// Last presented image, `width * height` ABGR pixels
    pub fn frame_image(&self) -> &[u32] {
        self.frames.front()
    }

    pub fn diagnostics(&self) -> Diagnostics {
        let forces = self.lattice.forces();
        Diagnostics {
            barrier_count: forces.count,
            barrier_fx: forces.fx,
            barrier_fy: forces.fy,
            barrier_centroid: forces.centroid(),
            divergences: self.divergences,
            substeps: self.substeps,
            frames: self.frame,
        }
    }

    pub(crate) fn image_layout_data(&self) -> ImageLayoutData {
        let front = self.frames.front();
        ImageLayoutData {
            ptr: front.as_ptr(),
            len_elements: front.len(),
            len_bytes: std::mem::size_of_val(front),
            width: self.width(),
            height: self.height(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
