//! Streaming: move each directional density one cell along its direction
//!
//! Four in-place sweeps. Each owns two planes and walks in the order that
//! reads a source before it is overwritten, so the sweeps run as independent
//! tasks. Bounce-back then reflects whatever landed on solid cells.

use crate::spatial::lattice::{BarrierForces, Distribution, Lattice};
use crate::systems::workers;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sweeps + bounce-back; the force totals are stored on the lattice
pub fn stream(lattice: &mut Lattice) -> BarrierForces {
    let rows = workers::rows_per_block(lattice.height());
    stream_with(lattice, rows)
}

pub fn stream_with(lattice: &mut Lattice, rows_per_block: usize) -> BarrierForces {
    stream_sweeps(lattice);
    let forces = bounce_back(lattice, rows_per_block);
    lattice.set_forces(forces);
    forces
}

pub fn stream_sweeps(lattice: &mut Lattice) {
    let w = lattice.width();
    let h = lattice.height();

    let n_n = &mut lattice.n_n;
    let n_nw = &mut lattice.n_nw;
    let n_e = &mut lattice.n_e;
    let n_ne = &mut lattice.n_ne;
    let n_s = &mut lattice.n_s;
    let n_se = &mut lattice.n_se;
    let n_w = &mut lattice.n_w;
    let n_sw = &mut lattice.n_sw;

    #[cfg(feature = "parallel")]
    {
        rayon::join(
            || {
                rayon::join(
                    || sweep_north(n_n, n_nw, w, h),
                    || sweep_east(n_e, n_ne, w, h),
                )
            },
            || {
                rayon::join(
                    || sweep_south(n_s, n_se, w, h),
                    || sweep_west(n_w, n_sw, w, h),
                )
            },
        );
    }

    #[cfg(not(feature = "parallel"))]
    {
        sweep_north(n_n, n_nw, w, h);
        sweep_east(n_e, n_ne, w, h);
        sweep_south(n_s, n_se, w, h);
        sweep_west(n_w, n_sw, w, h);
    }
}

/// Start in the NW corner: pull from the row below
fn sweep_north(n: &mut [f32], nw: &mut [f32], w: usize, h: usize) {
    for y in (1..h - 1).rev() {
        for x in 1..w - 1 {
            let i = x + y * w;
            let from_n = *fast!(n, [x + (y - 1) * w]);
            let from_nw = *fast!(nw, [x + 1 + (y - 1) * w]);
            fast!(n, [i] = from_n);
            fast!(nw, [i] = from_nw);
        }
    }
}

/// Start in the NE corner: pull from the left
fn sweep_east(e: &mut [f32], ne: &mut [f32], w: usize, h: usize) {
    for y in (1..h - 1).rev() {
        for x in (1..w - 1).rev() {
            let i = x + y * w;
            let from_e = *fast!(e, [x - 1 + y * w]);
            let from_ne = *fast!(ne, [x - 1 + (y - 1) * w]);
            fast!(e, [i] = from_e);
            fast!(ne, [i] = from_ne);
        }
    }
}

/// Start in the SE corner: pull from the row above
fn sweep_south(s: &mut [f32], se: &mut [f32], w: usize, h: usize) {
    for y in 1..h - 1 {
        for x in (1..w - 1).rev() {
            let i = x + y * w;
            let from_s = *fast!(s, [x + (y + 1) * w]);
            let from_se = *fast!(se, [x - 1 + (y + 1) * w]);
            fast!(s, [i] = from_s);
            fast!(se, [i] = from_se);
        }
    }
}

/// Start in the SW corner: pull from the right
fn sweep_west(wp: &mut [f32], sw: &mut [f32], w: usize, h: usize) {
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let i = x + y * w;
            let from_w = *fast!(wp, [x + 1 + y * w]);
            let from_sw = *fast!(sw, [x + 1 + (y + 1) * w]);
            fast!(wp, [i] = from_w);
            fast!(sw, [i] = from_sw);
        }
    }
}

/// What one row band saw on its solid cells, before anything is written
#[derive(Default)]
struct Gathered {
    // (cell index, post-sweep densities of that cell)
    solids: Vec<(usize, Distribution)>,
    forces: BarrierForces,
}

fn gather_rows(lattice: &Lattice, y_start: usize, y_end: usize) -> Gathered {
    let w = lattice.width();
    let mut out = Gathered::default();
    for y in y_start..y_end {
        for x in 1..w - 1 {
            let i = x + y * w;
            if !*fast!(lattice.barrier, [i]) {
                continue;
            }
            let d = lattice.cell(i);
            let (fx, fy) = d.momentum();
            out.forces.record(x, y, fx, fy);
            out.solids.push((i, d));
        }
    }
    out
}

/// Reflect densities off every interior solid cell into its neighbours.
///
/// All reflections read the post-sweep snapshot: the gather runs read-only
/// per row band, then the writes are applied in one serial pass.
pub fn bounce_back(lattice: &mut Lattice, rows_per_block: usize) -> BarrierForces {
    let h = lattice.height();
    let w = lattice.width();
    if h < 3 || w < 3 {
        return BarrierForces::default();
    }

    let rows_per_block = rows_per_block.max(1);
    let bands: Vec<(usize, usize)> = (1..h - 1)
        .step_by(rows_per_block)
        .map(|start| (start, (start + rows_per_block).min(h - 1)))
        .collect();

    let view: &Lattice = lattice;

    #[cfg(feature = "parallel")]
    let gathered: Vec<Gathered> = bands
        .into_par_iter()
        .map(|(start, end)| gather_rows(view, start, end))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let gathered: Vec<Gathered> = bands
        .into_iter()
        .map(|(start, end)| gather_rows(view, start, end))
        .collect();

    let mut forces = BarrierForces::default();
    for band in &gathered {
        forces.merge(&band.forces);
        for &(i, d) in &band.solids {
            fast!(lattice.n_e, [i + 1] = d.w);
            fast!(lattice.n_w, [i - 1] = d.e);
            fast!(lattice.n_n, [i + w] = d.s);
            fast!(lattice.n_s, [i - w] = d.n);
            fast!(lattice.n_ne, [i + 1 + w] = d.sw);
            fast!(lattice.n_nw, [i - 1 + w] = d.se);
            fast!(lattice.n_se, [i + 1 - w] = d.nw);
            fast!(lattice.n_sw, [i - 1 - w] = d.ne);
        }
    }
    forces
}
