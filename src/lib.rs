//! Windtunnel Engine - Lattice-Boltzmann flow solver for WASM and native hosts
//!
//! D2Q9 lattice with BGK collision, bounce-back obstacles and an open
//! inlet/outlet, driven one display frame at a time.
//!
//! Layout:
//! - core/        - Safety macros and error types
//! - domain/      - Parameters, barrier shapes, display quantities
//! - spatial/     - Lattice storage (SoA) and index arithmetic
//! - systems/     - Collision, streaming, drag, stability, projection
//! - simulation/  - Frame driver, perf metrics and the wasm facade

// Macros must be declared before any module that uses `fast!`.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use crate::core::error::{ConfigError, Result};
pub use domain::params::{BarrierShape, SimulationConfig, SimulationParameters};
pub use domain::quantity::Quantity;
pub use spatial::lattice::{BarrierForces, Density, Distribution, Lattice};
pub use systems::interaction::{DragIntent, DragTracker, PointerSample};
pub use systems::stability::Stability;
pub use simulation::{Diagnostics, FrameOutcome, PerfStats, Simulation};
pub use simulation::FluidSim;

use wasm_bindgen::prelude::*;

// Thread pool bootstrap for the browser build
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🌬️ Windtunnel WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Number of workers the row decomposition will use
#[wasm_bindgen]
pub fn worker_count() -> usize {
    systems::workers::worker_count()
}

// Quantity constants for JS
#[wasm_bindgen]
pub fn plot_density() -> u8 { Quantity::Density.index() }
#[wasm_bindgen]
pub fn plot_velocity_x() -> u8 { Quantity::VelocityX.index() }
#[wasm_bindgen]
pub fn plot_velocity_y() -> u8 { Quantity::VelocityY.index() }
#[wasm_bindgen]
pub fn plot_speed() -> u8 { Quantity::Speed.index() }
#[wasm_bindgen]
pub fn plot_curl() -> u8 { Quantity::Curl.index() }

// Barrier shape constants for JS
#[wasm_bindgen]
pub fn barrier_line() -> u8 { BarrierShape::Line.index() }
#[wasm_bindgen]
pub fn barrier_circle() -> u8 { BarrierShape::Circle.index() }
