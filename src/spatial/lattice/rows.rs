//! Row-block decomposition for data-parallel passes
//!
//! Every block owns disjoint mutable slices of each plane, so blocks can be
//! handed to separate workers without locks.

use super::*;

/// Contiguous band of whole rows `[y_start, y_start + rows)`
pub struct RowBlock<'a> {
    pub y_start: usize,
    pub rows: usize,
    pub width: usize,
    pub n0: &'a mut [f32],
    pub n_n: &'a mut [f32],
    pub n_s: &'a mut [f32],
    pub n_e: &'a mut [f32],
    pub n_w: &'a mut [f32],
    pub n_ne: &'a mut [f32],
    pub n_se: &'a mut [f32],
    pub n_nw: &'a mut [f32],
    pub n_sw: &'a mut [f32],
    pub rho: &'a mut [f32],
    pub ux: &'a mut [f32],
    pub uy: &'a mut [f32],
}

impl<'a> RowBlock<'a> {
    /// Local index of `(x, local_row)`
    #[inline]
    pub fn local(&self, x: usize, row: usize) -> usize {
        x + row * self.width
    }

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
    pub fn store(&mut self, i: usize, d: &Distribution) {
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
}

impl Lattice {
    /// Split the whole lattice into bands of `rows_per_block` rows.
    /// The last band takes the remainder.
    pub fn row_blocks(&mut self, rows_per_block: usize) -> Vec<RowBlock<'_>> {
        let width = self.width;
        let height = self.height;
        let rows_per_block = rows_per_block.clamp(1, height);
        let chunk = rows_per_block * width;

        let mut n0 = self.n0.chunks_mut(chunk);
        let mut n_n = self.n_n.chunks_mut(chunk);
        let mut n_s = self.n_s.chunks_mut(chunk);
        let mut n_e = self.n_e.chunks_mut(chunk);
        let mut n_w = self.n_w.chunks_mut(chunk);
        let mut n_ne = self.n_ne.chunks_mut(chunk);
        let mut n_se = self.n_se.chunks_mut(chunk);
        let mut n_nw = self.n_nw.chunks_mut(chunk);
        let mut n_sw = self.n_sw.chunks_mut(chunk);
        let mut rho = self.rho.chunks_mut(chunk);
        let mut ux = self.ux.chunks_mut(chunk);
        let mut uy = self.uy.chunks_mut(chunk);

        let mut blocks = Vec::with_capacity(height.div_ceil(rows_per_block));
        let mut y_start = 0;
        while let (
            Some(n0),
            Some(n_n),
            Some(n_s),
            Some(n_e),
            Some(n_w),
            Some(n_ne),
            Some(n_se),
            Some(n_nw),
            Some(n_sw),
            Some(rho),
            Some(ux),
            Some(uy),
        ) = (
            n0.next(),
            n_n.next(),
            n_s.next(),
            n_e.next(),
            n_w.next(),
            n_ne.next(),
            n_se.next(),
            n_nw.next(),
            n_sw.next(),
            rho.next(),
            ux.next(),
            uy.next(),
        ) {
            let rows = n0.len() / width;
            blocks.push(RowBlock {
                y_start,
                rows,
                width,
                n0,
                n_n,
                n_s,
                n_e,
                n_w,
                n_ne,
                n_se,
                n_nw,
                n_sw,
                rho,
                ux,
                uy,
            });
            y_start += rows;
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_cover_every_row_once() {
        let mut lattice = Lattice::new(7, 23, &SimulationParameters::default()).unwrap();
        let blocks = lattice.row_blocks(5);
        assert_eq!(blocks.len(), 5);
        let mut next = 0;
        for block in &blocks {
            assert_eq!(block.y_start, next);
            assert_eq!(block.n0.len(), block.rows * 7);
            next += block.rows;
        }
        assert_eq!(next, 23);
        assert_eq!(blocks[4].rows, 3);
    }

    #[test]
    fn oversized_block_is_the_whole_lattice() {
        let mut lattice = Lattice::new(4, 4, &SimulationParameters::default()).unwrap();
        let blocks = lattice.row_blocks(100);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].rows, 4);
    }
}
