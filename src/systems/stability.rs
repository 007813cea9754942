//! Divergence monitor
//!
//! Large velocities or tiny viscosities make BGK blow up: density goes
//! negative or non-finite within a few steps. Scanning one row is enough to
//! notice; recovery throws the flow away and restarts from inlet conditions.

use crate::spatial::lattice::Lattice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    Diverged,
}

impl Stability {
    #[inline]
    pub fn is_diverged(self) -> bool {
        matches!(self, Stability::Diverged)
    }
}

/// Check the middle row without touching anything
pub fn check(lattice: &Lattice) -> Stability {
    let y = lattice.middle_row();
    let start = lattice.index(0, y);
    let row = &lattice.rho[start..start + lattice.width()];
    if row.iter().any(|&rho| rho <= 0.0 || !rho.is_finite()) {
        Stability::Diverged
    } else {
        Stability::Stable
    }
}

/// Reset the fluid if the middle row has diverged
pub fn check_and_recover(lattice: &mut Lattice) -> Stability {
    let status = check(lattice);
    if status.is_diverged() {
        log::warn!(
            "flow diverged (u0={}, visc={}); resetting fluid to inlet equilibrium",
            lattice.flow_velocity(),
            lattice.flow_viscosity()
        );
        lattice.reset_fluid();
    }
    status
}
