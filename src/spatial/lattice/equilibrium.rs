//! D2Q9 equilibrium distribution and the initializers built on it

use super::*;

pub const FOUR_NINTHS: f32 = 4.0 / 9.0;
pub const ONE_NINTH: f32 = 1.0 / 9.0;
pub const ONE_THIRTYSIXTH: f32 = 1.0 / 36.0;

/// The nine densities of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Distribution {
    pub rest: f32,
    pub n: f32,
    pub s: f32,
    pub e: f32,
    pub w: f32,
    pub ne: f32,
    pub se: f32,
    pub nw: f32,
    pub sw: f32,
}

/// Density to use when setting a cell to equilibrium
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    /// Keep whatever `rho` the cell currently holds (used by drag)
    Keep,
    Set(f32),
}

impl Distribution {
    /// Closed-form equilibrium for velocity `(ux, uy)` and density `rho`
    #[inline]
    pub fn equilibrium(ux: f32, uy: f32, rho: f32) -> Self {
        let one9thrho = ONE_NINTH * rho;
        let one36thrho = ONE_THIRTYSIXTH * rho;
        let ux3 = 3.0 * ux;
        let uy3 = 3.0 * uy;
        let ux2 = ux * ux;
        let uy2 = uy * uy;
        let uxuy2 = 2.0 * ux * uy;
        let u2 = ux2 + uy2;
        let u215 = 1.5 * u2;
        Self {
            rest: FOUR_NINTHS * rho * (1.0 - u215),
            e: one9thrho * (1.0 + ux3 + 4.5 * ux2 - u215),
            w: one9thrho * (1.0 - ux3 + 4.5 * ux2 - u215),
            n: one9thrho * (1.0 + uy3 + 4.5 * uy2 - u215),
            s: one9thrho * (1.0 - uy3 + 4.5 * uy2 - u215),
            ne: one36thrho * (1.0 + ux3 + uy3 + 4.5 * (u2 + uxuy2) - u215),
            se: one36thrho * (1.0 + ux3 - uy3 + 4.5 * (u2 - uxuy2) - u215),
            nw: one36thrho * (1.0 - ux3 + uy3 + 4.5 * (u2 - uxuy2) - u215),
            sw: one36thrho * (1.0 - ux3 - uy3 + 4.5 * (u2 + uxuy2) - u215),
        }
    }

    /// Macroscopic density (zeroth moment)
    #[inline]
    pub fn density(&self) -> f32 {
        self.rest + self.n + self.s + self.e + self.w + self.nw + self.ne + self.sw + self.se
    }

    /// Unnormalized momentum `(rho*ux, rho*uy)` (first moment)
    #[inline]
    pub fn momentum(&self) -> (f32, f32) {
        (
            self.e + self.ne + self.se - self.w - self.nw - self.sw,
            self.n + self.ne + self.nw - self.s - self.se - self.sw,
        )
    }

    /// Sum of the eight moving densities
    #[inline]
    pub fn moving(&self) -> f32 {
        self.density() - self.rest
    }

    /// BGK step: move every direction a fraction `omega` toward `target`
    #[inline]
    pub fn relax_toward(&mut self, target: &Distribution, omega: f32) {
        self.rest += omega * (target.rest - self.rest);
        self.e += omega * (target.e - self.e);
        self.w += omega * (target.w - self.w);
        self.n += omega * (target.n - self.n);
        self.s += omega * (target.s - self.s);
        self.ne += omega * (target.ne - self.ne);
        self.se += omega * (target.se - self.se);
        self.nw += omega * (target.nw - self.nw);
        self.sw += omega * (target.sw - self.sw);
    }
}

impl Lattice {
    #[inline]
    pub fn cell(&self, i: usize) -> Distribution {
        Distribution {
            rest: self.n0[i],
            n: self.n_n[i],
            s: self.n_s[i],
            e: self.n_e[i],
            w: self.n_w[i],
            ne: self.n_ne[i],
            se: self.n_se[i],
            nw: self.n_nw[i],
            sw: self.n_sw[i],
        }
    }

    #[inline]
    pub fn store_cell(&mut self, i: usize, d: &Distribution) {
        self.n0[i] = d.rest;
        self.n_n[i] = d.n;
        self.n_s[i] = d.s;
        self.n_e[i] = d.e;
        self.n_w[i] = d.w;
        self.n_ne[i] = d.ne;
        self.n_se[i] = d.se;
        self.n_nw[i] = d.nw;
        self.n_sw[i] = d.sw;
    }

    /// Set one cell to equilibrium and record its macroscopic values
    pub fn set_equilibrium(&mut self, x: usize, y: usize, ux: f32, uy: f32, density: Density) {
        let i = self.index(x, y);
        let rho = match density {
            Density::Keep => self.rho[i],
            Density::Set(rho) => rho,
        };
        self.store_cell(i, &Distribution::equilibrium(ux, uy, rho));
        self.rho[i] = rho;
        self.ux[i] = ux;
        self.uy[i] = uy;
    }

    /// Fill every cell with steady rightward inlet flow at unit density.
    /// Barriers are left as painted.
    pub fn reset_fluid(&mut self) {
        let u0 = self.flow_velocity;
        let inlet = Distribution::equilibrium(u0, 0.0, 1.0);
        for i in 0..self.size {
            self.store_cell(i, &inlet);
        }
        self.rho.fill(1.0);
        self.ux.fill(u0);
        self.uy.fill(0.0);
        self.curl.fill(0.0);
        // Forces of the discarded flow no longer describe anything
        self.forces = BarrierForces::default();
    }

    /// Re-pin the four border rows/columns to inlet equilibrium (wind tunnel
    /// entry/exit). Must run before collision, which reads the border.
    pub fn set_boundaries(&mut self) {
        let u0 = self.flow_velocity;
        let (w, h) = (self.width, self.height);
        for x in 0..w {
            self.set_equilibrium(x, 0, u0, 0.0, Density::Set(1.0));
            self.set_equilibrium(x, h - 1, u0, 0.0, Density::Set(1.0));
        }
        for y in 1..h - 1 {
            self.set_equilibrium(0, y, u0, 0.0, Density::Set(1.0));
            self.set_equilibrium(w - 1, y, u0, 0.0, Density::Set(1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equilibrium_sums_back_to_density() {
        for &(ux, uy, rho) in &[
            (0.0, 0.0, 1.0),
            (0.1, 0.0, 1.0),
            (-0.05, 0.08, 0.93),
            (0.12, -0.12, 1.07),
        ] {
            let eq = Distribution::equilibrium(ux, uy, rho);
            assert!((eq.density() - rho).abs() < 1e-5, "rho {rho} got {}", eq.density());
        }
    }

    #[test]
    fn equilibrium_carries_requested_momentum() {
        let eq = Distribution::equilibrium(0.07, -0.03, 1.2);
        let (mx, my) = eq.momentum();
        assert!((mx / 1.2 - 0.07).abs() < 1e-5);
        assert!((my / 1.2 + 0.03).abs() < 1e-5);
    }

    #[test]
    fn relaxation_with_unit_omega_lands_on_target() {
        let mut d = Distribution::equilibrium(0.0, 0.0, 1.0);
        let target = Distribution::equilibrium(0.1, 0.0, 1.0);
        d.relax_toward(&target, 1.0);
        assert!((d.e - target.e).abs() < 1e-7);
        assert!((d.rest - target.rest).abs() < 1e-7);
    }

    #[test]
    fn omega_follows_viscosity() {
        let params = SimulationParameters { flow_viscosity: 0.02, ..Default::default() };
        let lattice = Lattice::new(8, 8, &params).unwrap();
        assert!((lattice.omega() - 1.0 / 0.56).abs() < 1e-6);
    }

    #[test]
    fn keep_density_preserves_local_rho() {
        let mut lattice = Lattice::new(16, 16, &SimulationParameters::default()).unwrap();
        let i = lattice.index(8, 8);
        lattice.rho[i] = 1.05;
        lattice.set_equilibrium(8, 8, 0.02, -0.01, Density::Keep);
        assert_eq!(lattice.rho[i], 1.05);
        assert!((lattice.cell(i).density() - 1.05).abs() < 1e-5);
        assert_eq!(lattice.ux[i], 0.02);
        assert_eq!(lattice.uy[i], -0.01);
    }

    #[test]
    fn reset_fluid_clears_barrier_forces() {
        let mut lattice = Lattice::new(16, 16, &SimulationParameters::default()).unwrap();
        let mut stale = BarrierForces::default();
        stale.record(4, 4, f32::NAN, 2.0);
        lattice.set_forces(stale);
        lattice.reset_fluid();
        assert_eq!(*lattice.forces(), BarrierForces::default());
    }

    #[test]
    fn boundaries_are_pinned_to_inlet() {
        let params = SimulationParameters { flow_velocity: 0.08, ..Default::default() };
        let mut lattice = Lattice::new(10, 6, &params).unwrap();
        let corner = lattice.index(9, 5);
        lattice.n_e[corner] = 3.0;
        lattice.rho[corner] = 3.0;
        lattice.set_boundaries();
        assert_eq!(lattice.cell(corner), Distribution::equilibrium(0.08, 0.0, 1.0));
        assert_eq!(lattice.rho[corner], 1.0);
        assert_eq!(lattice.ux[corner], 0.08);
    }
}
