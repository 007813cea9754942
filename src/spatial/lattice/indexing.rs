use super::*;

impl Lattice {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} lattice",
            x,
            y,
            self.width,
            self.height
        );
        x + y * self.width
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Row scanned by the stability monitor
    #[inline]
    pub fn middle_row(&self) -> usize {
        self.height / 2
    }
}
