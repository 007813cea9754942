//! Domain vocabulary: what the caller configures and what it can display

pub mod palette;
pub mod params;
pub mod quantity;
