//! Lattice - Structure of Arrays (SoA) storage for the D2Q9 solver
//!
//! One flat plane per lattice direction instead of `Vec<[f32; 9]>`: the four
//! streaming sweeps each own two planes outright, so they can run as
//! independent tasks without aliasing.
//!
//! Cell index is row-major: `i = x + y * width`. "North" is `+y`.

use crate::core::error::Result;
use crate::domain::palette::ColorPalette;
use crate::domain::params::{validate_dimensions, BarrierShape, SimulationParameters};

mod barrier;
mod equilibrium;
mod forces;
mod indexing;
mod rows;

pub use equilibrium::{Density, Distribution, FOUR_NINTHS, ONE_NINTH, ONE_THIRTYSIXTH};
pub use forces::BarrierForces;
pub use rows::RowBlock;

pub struct Lattice {
    width: usize,
    height: usize,
    size: usize,

    // Inlet conditions pinned at the border every sub-step
    flow_velocity: f32,
    flow_viscosity: f32,
    barrier_shape: BarrierShape,

    // Microscopic densities, one plane per direction
    pub n0: Vec<f32>,
    pub n_n: Vec<f32>,
    pub n_s: Vec<f32>,
    pub n_e: Vec<f32>,
    pub n_w: Vec<f32>,
    pub n_ne: Vec<f32>,
    pub n_se: Vec<f32>,
    pub n_nw: Vec<f32>,
    pub n_sw: Vec<f32>,

    // Macroscopic fields, refreshed by collision
    pub rho: Vec<f32>,
    pub ux: Vec<f32>,
    pub uy: Vec<f32>,
    // Derived on demand for display
    pub curl: Vec<f32>,

    pub barrier: Vec<bool>,

    palette: ColorPalette,
    forces: BarrierForces,
}

impl Lattice {
    /// Allocate a lattice, paint its barrier and fill it with inlet flow.
    ///
    /// This is the only way to size a lattice; there is no partial resize.
    pub fn new(width: u32, height: u32, params: &SimulationParameters) -> Result<Self> {
        validate_dimensions(width, height)?;
        params.validate()?;

        let width = width as usize;
        let height = height as usize;
        let size = width * height;

        let mut lattice = Self {
            width,
            height,
            size,
            flow_velocity: params.flow_velocity,
            flow_viscosity: params.flow_viscosity,
            barrier_shape: params.barrier_shape,
            n0: vec![0.0; size],
            n_n: vec![0.0; size],
            n_s: vec![0.0; size],
            n_e: vec![0.0; size],
            n_w: vec![0.0; size],
            n_ne: vec![0.0; size],
            n_se: vec![0.0; size],
            n_nw: vec![0.0; size],
            n_sw: vec![0.0; size],
            rho: vec![0.0; size],
            ux: vec![0.0; size],
            uy: vec![0.0; size],
            curl: vec![0.0; size],
            barrier: vec![false; size],
            palette: ColorPalette::jet(),
            forces: BarrierForces::default(),
        };

        lattice.clear_barriers();
        lattice.paint_barrier(params.barrier_shape);
        lattice.reset_fluid();

        log::debug!(
            "lattice initialized: {}x{} u0={} visc={} barrier={} ({} solid cells)",
            width,
            height,
            params.flow_velocity,
            params.flow_viscosity,
            params.barrier_shape.label(),
            lattice.barrier_count()
        );

        Ok(lattice)
    }

    /// Full re-initialization in place. On error the lattice is left untouched.
    pub fn reinitialize(&mut self, width: u32, height: u32, params: &SimulationParameters) -> Result<()> {
        *self = Self::new(width, height, params)?;
        Ok(())
    }

    #[inline]
    pub fn flow_velocity(&self) -> f32 { self.flow_velocity }

    #[inline]
    pub fn flow_viscosity(&self) -> f32 { self.flow_viscosity }

    #[inline]
    pub fn barrier_shape(&self) -> BarrierShape { self.barrier_shape }

    /// Reciprocal of the relaxation time
    #[inline]
    pub fn omega(&self) -> f32 {
        1.0 / (3.0 * self.flow_viscosity + 0.5)
    }

    #[inline]
    pub fn palette(&self) -> &ColorPalette { &self.palette }

    /// Force totals from the most recent streaming pass
    #[inline]
    pub fn forces(&self) -> &BarrierForces { &self.forces }

    pub(crate) fn set_forces(&mut self, forces: BarrierForces) {
        self.forces = forces;
    }

    /// Sum of all nine planes over every cell
    pub fn total_density(&self) -> f64 {
        (0..self.size).map(|i| self.cell(i).density() as f64).sum()
    }
}
