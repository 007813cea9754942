//! Core utilities shared by every stage of the solver

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
pub mod error;
