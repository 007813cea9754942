//! Field-to-image projection
//!
//! Maps the chosen macroscopic quantity through the palette into packed ABGR
//! pixels, one image row per lattice row.

use crate::domain::palette::{BARRIER_INDEX, N_COLORS};
use crate::domain::quantity::Quantity;
use crate::spatial::lattice::Lattice;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const CONTRAST: f32 = 1.2;

/// Central-difference vorticity on interior cells, zero on the border
pub fn compute_curl(lattice: &mut Lattice) {
    let w = lattice.width();
    let h = lattice.height();
    let ux = &lattice.ux;
    let uy = &lattice.uy;

    let curl_row = |(y, row): (usize, &mut [f32])| {
        if y == 0 || y + 1 >= h {
            row.fill(0.0);
            return;
        }
        row[0] = 0.0;
        row[w - 1] = 0.0;
        for x in 1..w - 1 {
            let i = x + y * w;
            row[x] = *fast!(uy, [i + 1]) - *fast!(uy, [i - 1]) - *fast!(ux, [i + w])
                + *fast!(ux, [i - w]);
        }
    };

    #[cfg(feature = "parallel")]
    lattice.curl.par_chunks_mut(w).enumerate().for_each(curl_row);

    #[cfg(not(feature = "parallel"))]
    lattice.curl.chunks_mut(w).enumerate().for_each(curl_row);
}

/// Palette index for one fluid cell, truncated toward zero and clamped to
/// `0..=N_COLORS`
#[inline]
pub fn palette_index(quantity: Quantity, rho: f32, ux: f32, uy: f32, curl: f32) -> usize {
    let value = match quantity {
        Quantity::Density => (rho - 1.0) * 6.0 * CONTRAST + 0.5,
        Quantity::VelocityX => ux * 2.0 * CONTRAST + 0.5,
        Quantity::VelocityY => uy * 2.0 * CONTRAST + 0.5,
        Quantity::Speed => (ux * ux + uy * uy).sqrt() * 4.0 * CONTRAST,
        Quantity::Curl => curl * 5.0 * CONTRAST + 0.5,
    };
    // NaN casts to 0
    let index = (N_COLORS as f32 * value) as i32;
    index.clamp(0, N_COLORS as i32) as usize
}

/// Write `width * height` ABGR pixels for `quantity` into `image`.
///
/// Curl is refreshed first when it is the quantity shown.
pub fn project_to_image(lattice: &mut Lattice, quantity: Quantity, image: &mut [u32]) {
    debug_assert_eq!(image.len(), lattice.size(), "image must match the lattice");
    let len = image.len().min(lattice.size());
    let image = &mut image[..len];
    if quantity.needs_curl() {
        compute_curl(lattice);
    }

    let lattice: &Lattice = lattice;
    let w = lattice.width();
    let palette = lattice.palette();
    let barrier_color = palette.packed(BARRIER_INDEX);

    let project_row = |(y, row): (usize, &mut [u32])| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let i = x + y * w;
            *pixel = if *fast!(lattice.barrier, [i]) {
                barrier_color
            } else {
                palette.packed(palette_index(
                    quantity,
                    *fast!(lattice.rho, [i]),
                    *fast!(lattice.ux, [i]),
                    *fast!(lattice.uy, [i]),
                    *fast!(lattice.curl, [i]),
                ))
            };
        }
    };

    #[cfg(feature = "parallel")]
    image.par_chunks_mut(w).enumerate().for_each(project_row);

    #[cfg(not(feature = "parallel"))]
    image.chunks_mut(w).enumerate().for_each(project_row);
}
