//! BGK collision: relax every interior cell toward its local equilibrium
//!
//! Purely local, so each row block is updated independently. Solid cells are
//! collided like fluid; bounce-back only cares about what they hold afterwards.

use crate::spatial::lattice::{Distribution, Lattice, RowBlock};
use crate::systems::workers;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub fn collide(lattice: &mut Lattice) {
    let rows = workers::rows_per_block(lattice.height());
    collide_with(lattice, rows);
}

/// Collision with an explicit block size (1 row per block up to the whole grid)
pub fn collide_with(lattice: &mut Lattice, rows_per_block: usize) {
    let omega = lattice.omega();
    let height = lattice.height();
    let blocks = lattice.row_blocks(rows_per_block);

    #[cfg(feature = "parallel")]
    {
        blocks
            .into_par_iter()
            .for_each(|mut block| collide_block(&mut block, height, omega));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for mut block in blocks {
            collide_block(&mut block, height, omega);
        }
    }

    copy_outflow(lattice);
}

fn collide_block(block: &mut RowBlock<'_>, height: usize, omega: f32) {
    let width = block.width;
    for row in 0..block.rows {
        let y = block.y_start + row;
        if y == 0 || y + 1 >= height {
            continue;
        }
        for x in 1..width - 1 {
            let i = block.local(x, row);
            let mut d = block.cell(i);

            // No rho == 0 guard: the stability monitor catches blow-ups
            let rho = d.density();
            let inv_rho = 1.0 / rho;
            let (mx, my) = d.momentum();
            let ux = mx * inv_rho;
            let uy = my * inv_rho;

            block.rho[i] = rho;
            block.ux[i] = ux;
            block.uy[i] = uy;

            d.relax_toward(&Distribution::equilibrium(ux, uy, rho), omega);
            block.store(i, &d);
        }
    }
}

/// Open outlet: the right column takes the left-moving densities of its
/// neighbour so nothing reflects back into the tunnel.
fn copy_outflow(lattice: &mut Lattice) {
    let width = lattice.width();
    let height = lattice.height();
    for y in 1..height.saturating_sub(2) {
        let src = lattice.index(width - 2, y);
        let dst = lattice.index(width - 1, y);
        lattice.n_w[dst] = lattice.n_w[src];
        lattice.n_nw[dst] = lattice.n_nw[src];
        lattice.n_sw[dst] = lattice.n_sw[src];
    }
}
