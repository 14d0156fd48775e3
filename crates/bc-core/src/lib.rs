pub mod eval;
pub mod model;
pub mod resolution;
pub mod sample;

pub use eval::evaluate;
pub use model::*;
pub use resolution::{Resolution, parse_resolution};
pub use sample::{resample, sample};
