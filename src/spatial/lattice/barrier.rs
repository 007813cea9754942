use super::*;

/// Half-length of the vertical line obstacle
const LINE_HALF_LENGTH: isize = 8;
const CIRCLE_RADIUS: isize = 6;

impl Lattice {
    pub fn clear_barriers(&mut self) {
        self.barrier.fill(false);
    }

    /// Mark or unmark a single solid cell. Out-of-grid coordinates are ignored.
    pub fn set_barrier(&mut self, x: isize, y: isize, solid: bool) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.index(x as usize, y as usize);
        self.barrier[i] = solid;
        true
    }

    #[inline]
    pub fn is_barrier(&self, x: usize, y: usize) -> bool {
        self.barrier[self.index(x, y)]
    }

    pub fn barrier_count(&self) -> usize {
        self.barrier.iter().filter(|&&b| b).count()
    }

    /// Paint a preset obstacle centred at `(height/3, height/2)`.
    ///
    /// Cells that fall outside the grid are skipped, so small lattices get a
    /// clipped shape instead of a panic.
    pub fn paint_barrier(&mut self, shape: BarrierShape) {
        let cx = (self.height / 3) as isize;
        let cy = (self.height / 2) as isize;

        match shape {
            BarrierShape::Line => {
                for y in (cy - LINE_HALF_LENGTH)..=(cy + LINE_HALF_LENGTH) {
                    self.set_barrier(cx, y, true);
                }
            }
            BarrierShape::Circle => {
                let r = CIRCLE_RADIUS;
                for i in (cx - r)..=(cx + r) {
                    for j in (cy - r)..=(cy + r) {
                        let dx = i - cx;
                        let dy = j - cy;
                        // Thin ring tolerance: within `r` of the exact circle
                        if dx * dx + dy * dy - r * r <= r {
                            self.set_barrier(i, j, true);
                        }
                    }
                }
            }
        }
    }
}
