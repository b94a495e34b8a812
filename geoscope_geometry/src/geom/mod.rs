#![allow(clippy::module_inception)]

mod feature;
mod geometry;
mod types;

pub use feature::*;
pub use geometry::*;
pub use types::*;
