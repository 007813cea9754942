#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use windtunnel_engine::{barrier_circle, plot_curl, FluidSim};

#[wasm_bindgen_test]
fn wasm_smoke_steps_and_renders() {
    let mut sim = FluidSim::new(64, 48, 0.1, 0.03, barrier_circle()).unwrap();
    assert_eq!(sim.step_frame(10.0, 10.0, false), 1);
    sim.set_quantity(plot_curl()).unwrap();
    sim.render();

    let layout = sim.image_layout();
    assert_eq!(layout.len_elements(), 64 * 48);
    assert_eq!(layout.len_bytes(), 64 * 48 * 4);
    assert!(sim.barrier_count() > 0);
}

#[wasm_bindgen_test]
fn wasm_smoke_rejects_bad_shape() {
    assert!(FluidSim::new(64, 48, 0.1, 0.03, 9).is_err());
}
