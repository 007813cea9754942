//! Systems - the stages of one sub-step and what happens around it
//!
//! - collision:   BGK relaxation, row-block parallel
//! - streaming:   four directional sweeps + bounce-back at solid cells
//! - interaction: pointer drag → localized velocity nudge
//! - stability:   divergence detection and recovery
//! - projection:  macroscopic field → ABGR pixels

pub mod collision;
pub mod interaction;
pub mod projection;
pub mod stability;
pub mod streaming;
pub mod workers;
