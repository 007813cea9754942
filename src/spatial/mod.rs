//! Spatial storage for the solver

pub mod lattice;
