use wasm_bindgen::prelude::*;

use crate::core::error::ConfigError;
use crate::domain::params::{BarrierShape, SimulationParameters};
use crate::domain::quantity::Quantity;
use crate::systems::interaction::PointerSample;

use super::perf_stats::PerfStats;
use super::Simulation;

fn js_err(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Where the front image lives in wasm memory
#[wasm_bindgen]
pub struct ImageLayout {
    ptr: u32,
    len_elements: u32,
    len_bytes: u32,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl ImageLayout {
    #[wasm_bindgen(getter)]
    pub fn ptr(&self) -> u32 { self.ptr }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 { self.len_elements }
    #[wasm_bindgen(getter)]
    pub fn len_bytes(&self) -> u32 { self.len_bytes }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
}

#[wasm_bindgen]
pub struct FluidSim {
    core: Simulation,
}

#[wasm_bindgen]
impl FluidSim {
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        flow_velocity: f32,
        flow_viscosity: f32,
        barrier_shape: u8,
    ) -> Result<FluidSim, JsValue> {
        let params = build_params(flow_velocity, flow_viscosity, barrier_shape)?;
        let core = Simulation::new(width, height, params).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<FluidSim, JsValue> {
        let core = Simulation::from_config_json(json).map_err(js_err)?;
        Ok(Self { core })
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(js_err)
    }

    /// Full re-initialization; keeps steps per frame
    pub fn reconfigure(
        &mut self,
        width: u32,
        height: u32,
        flow_velocity: f32,
        flow_viscosity: f32,
        barrier_shape: u8,
    ) -> Result<(), JsValue> {
        let mut params = build_params(flow_velocity, flow_viscosity, barrier_shape)?;
        params.steps_per_frame = self.core.params().steps_per_frame;
        self.core.reconfigure(width, height, params).map_err(js_err)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() as u32 }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Advance one display frame. Returns 0 paused, 1 advanced, 2 recovered.
    pub fn step_frame(&mut self, pointer_x: f32, pointer_y: f32, drag_active: bool) -> u8 {
        self.core
            .advance_frame(PointerSample::new(pointer_x, pointer_y, drag_active))
            .code()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    pub fn set_quantity(&mut self, index: u8) -> Result<(), JsValue> {
        let quantity = Quantity::from_index(index).map_err(js_err)?;
        self.core.set_quantity(quantity);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn quantity(&self) -> u8 { self.core.quantity().index() }

    /// Advance to the next quantity and return its index
    pub fn cycle_quantity(&mut self) -> u8 {
        self.core.cycle_quantity().index()
    }

    pub fn quantity_label(&self) -> String {
        self.core.quantity().label().to_string()
    }

    pub fn set_steps_per_frame(&mut self, steps: u32) -> Result<(), JsValue> {
        self.core.set_steps_per_frame(steps).map_err(js_err)
    }

    pub fn set_pixels_per_cell(&mut self, pixels_per_cell: f32) -> Result<(), JsValue> {
        self.core.set_pixels_per_cell(pixels_per_cell).map_err(js_err)
    }

    pub fn set_barrier(&mut self, x: i32, y: i32, solid: bool) -> bool {
        self.core.set_barrier(x as isize, y as isize, solid)
    }

    pub fn clear_barriers(&mut self) {
        self.core.clear_barriers();
    }

    pub fn reset_fluid(&mut self) {
        self.core.reset_fluid();
    }

    /// Project the current quantity and present it
    pub fn render(&mut self) {
        self.core.render();
    }

    /// Pointer to the front image (ABGR, width * height)
    pub fn image_ptr(&self) -> *const u32 {
        self.core.frame_image().as_ptr()
    }

    pub fn image_len(&self) -> usize {
        self.core.frame_image().len()
    }

    pub fn image_len_bytes(&self) -> usize {
        std::mem::size_of_val(self.core.frame_image())
    }

    pub fn image_layout(&self) -> ImageLayout {
        let data = self.core.image_layout_data();
        ImageLayout {
            ptr: data.ptr as u32,
            len_elements: data.len_elements as u32,
            len_bytes: data.len_bytes as u32,
            width: data.width as u32,
            height: data.height as u32,
        }
    }

    // === Diagnostics ===

    pub fn barrier_count(&self) -> u32 { self.core.diagnostics().barrier_count }

    pub fn barrier_fx(&self) -> f32 { self.core.diagnostics().barrier_fx }

    pub fn barrier_fy(&self) -> f32 { self.core.diagnostics().barrier_fy }

    /// NaN when there are no interior barrier cells
    pub fn barrier_centroid_x(&self) -> f32 {
        self.core.diagnostics().barrier_centroid.map_or(f32::NAN, |(x, _)| x)
    }

    pub fn barrier_centroid_y(&self) -> f32 {
        self.core.diagnostics().barrier_centroid.map_or(f32::NAN, |(_, y)| y)
    }

    pub fn divergences(&self) -> u32 { self.core.divergences() }

    pub fn substeps(&self) -> u64 { self.core.substeps() }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}

fn build_params(flow_velocity: f32, flow_viscosity: f32, barrier_shape: u8) -> Result<SimulationParameters, JsValue> {
    let barrier_shape = BarrierShape::from_index(barrier_shape).map_err(js_err)?;
    Ok(SimulationParameters {
        flow_velocity,
        flow_viscosity,
        barrier_shape,
        ..Default::default()
    })
}
