use wasm_bindgen::prelude::*;

/// Timings accumulate over every sub-step of the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) stream_ms: f64,
    pub(super) drag_ms: f64,
    pub(super) stability_ms: f64,
    pub(super) project_ms: f64,

    pub(super) substeps: u32,
    pub(super) drag_applied: u32,
    pub(super) divergences: u32,
    pub(super) barrier_cells: u32,
    pub(super) grid_size: u32,
    pub(super) workers: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        // Projection runs outside the frame; keep its last timing
        let project_ms = self.project_ms;
        *self = PerfStats::default();
        self.project_ms = project_ms;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn stream_ms(&self) -> f64 { self.stream_ms }
    #[wasm_bindgen(getter)]
    pub fn drag_ms(&self) -> f64 { self.drag_ms }
    #[wasm_bindgen(getter)]
    pub fn stability_ms(&self) -> f64 { self.stability_ms }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.project_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn drag_applied(&self) -> u32 { self.drag_applied }
    #[wasm_bindgen(getter)]
    pub fn divergences(&self) -> u32 { self.divergences }
    #[wasm_bindgen(getter)]
    pub fn barrier_cells(&self) -> u32 { self.barrier_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn workers(&self) -> u32 { self.workers }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
