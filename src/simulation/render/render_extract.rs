use crate::systems::projection;

use super::{PerfTimer, Simulation};

/// Front/back image pair. The renderer only ever reads the front buffer;
/// projection writes the back buffer and `present` swaps them.
pub struct FrameBuffers {
    front: Vec<u32>,
    back: Vec<u32>,
}

impl FrameBuffers {
    pub fn new(len: usize) -> Self {
        Self {
            front: vec![0u32; len],
            back: vec![0u32; len],
        }
    }

    #[inline]
    pub fn front(&self) -> &[u32] {
        &self.front
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut [u32] {
        &mut self.back
    }

    #[inline]
    pub fn present(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.front.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }
}

pub(super) fn render(sim: &mut Simulation) {
    let perf_on = sim.perf_enabled;
    let quantity = sim.quantity;
    let lattice = &mut sim.lattice;
    let frames = &mut sim.frames;

    // Last projection only, not a running sum
    sim.perf_stats.project_ms = 0.0;
    PerfTimer::time_into(perf_on, &mut sim.perf_stats.project_ms, || {
        projection::project_to_image(lattice, quantity, frames.back_mut());
    });
    frames.present();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_swaps_front_and_back() {
        let mut frames = FrameBuffers::new(4);
        frames.back_mut().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(frames.front(), &[0, 0, 0, 0]);
        frames.present();
        assert_eq!(frames.front(), &[1, 2, 3, 4]);
        assert_eq!(frames.len(), 4);
    }
}
