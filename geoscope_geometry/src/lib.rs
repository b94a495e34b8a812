//! Geometry for reconstructed boundaries: coordinates, line strings, rings and polygons with
//! GeoJSON output, the spherical area approximation and the way stitching engine.

mod geom;
pub mod math;
pub mod stitch;

pub use geom::*;
