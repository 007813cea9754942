/// Net momentum exchanged with solid cells during one streaming pass,
/// plus the data needed to place the force arrow at the barrier centroid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarrierForces {
    pub count: u32,
    pub x_sum: u64,
    pub y_sum: u64,
    pub fx: f32,
    pub fy: f32,
}

impl BarrierForces {
    #[inline]
    pub fn record(&mut self, x: usize, y: usize, fx: f32, fy: f32) {
        self.count += 1;
        self.x_sum += x as u64;
        self.y_sum += y as u64;
        self.fx += fx;
        self.fy += fy;
    }

    /// Fold a per-worker partial sum into this one
    #[inline]
    pub fn merge(&mut self, other: &BarrierForces) {
        self.count += other.count;
        self.x_sum += other.x_sum;
        self.y_sum += other.y_sum;
        self.fx += other.fx;
        self.fy += other.fy;
    }

    /// Mean barrier position, or `None` with no solid interior cells
    pub fn centroid(&self) -> Option<(f32, f32)> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(((self.x_sum as f64 / n) as f32, (self.y_sum as f64 / n) as f32))
    }
}
