//! Pointer drag → localized velocity nudge
//!
//! The renderer reports the pointer once per frame in image pixels. Two
//! consecutive active samples give a displacement; that displacement, spread
//! over the frame's sub-steps, becomes the velocity imposed on a small patch
//! of cells around the pointer.

use crate::spatial::lattice::{Density, Lattice};

/// Cells closer than this to any border are never dragged
pub const DRAG_MARGIN: isize = 3;
/// Largest velocity nudge per sub-step, either sign
pub const MAX_PUSH: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub drag_active: bool,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, drag_active: bool) -> Self {
        Self { x, y, drag_active }
    }

    /// No pointer activity this frame
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Velocity to impose around one cell, reapplied on every sub-step of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragIntent {
    pub x: isize,
    pub y: isize,
    pub push_ux: f32,
    pub push_uy: f32,
}

/// Remembers the previous active sample between frames
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    baseline: Option<(f32, f32)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    pub fn reset(&mut self) {
        self.baseline = None;
    }

    /// Turn this frame's pointer sample into a drag intent.
    ///
    /// The first active sample only records a baseline. Releasing the pointer
    /// clears it. Non-finite coordinates are dropped without touching the
    /// baseline.
    pub fn compute_intent(
        &mut self,
        sample: PointerSample,
        pixels_per_cell: f32,
        steps_per_frame: u32,
    ) -> Option<DragIntent> {
        if !sample.drag_active {
            self.baseline = None;
            return None;
        }
        if !sample.x.is_finite() || !sample.y.is_finite() {
            return None;
        }

        let (prev_x, prev_y) = self.baseline.replace((sample.x, sample.y))?;

        let ppc = pixels_per_cell;
        let steps = steps_per_frame.max(1) as f32;
        Some(DragIntent {
            x: (sample.x / ppc).floor() as isize,
            y: (sample.y / ppc).floor() as isize,
            push_ux: ((sample.x - prev_x) / ppc / steps).clamp(-MAX_PUSH, MAX_PUSH),
            push_uy: ((sample.y - prev_y) / ppc / steps).clamp(-MAX_PUSH, MAX_PUSH),
        })
    }
}

/// Impose the drag velocity on a rounded patch (5 wide, 5 tall, corners
/// cut) around the target cell, keeping each cell's density.
///
/// Returns false, leaving the lattice untouched, when the patch would come
/// within `DRAG_MARGIN` of the border.
pub fn apply_drag(lattice: &mut Lattice, intent: &DragIntent) -> bool {
    let w = lattice.width() as isize;
    let h = lattice.height() as isize;
    let (x, y) = (intent.x, intent.y);

    let inside = x > DRAG_MARGIN
        && x < w - 1 - DRAG_MARGIN
        && y > DRAG_MARGIN
        && y < h - 1 - DRAG_MARGIN;
    if !inside {
        return false;
    }

    let (ux, uy) = (intent.push_ux, intent.push_uy);
    let mut nudge = |cx: isize, cy: isize| {
        lattice.set_equilibrium(cx as usize, cy as usize, ux, uy, Density::Keep);
    };

    for dx in -1..=1 {
        nudge(x + dx, y + 2);
        nudge(x + dx, y - 2);
    }
    for dx in -2..=2 {
        for dy in -1..=1 {
            nudge(x + dx, y + dy);
        }
    }
    true
}
