// Geometry primitives of a reconstructed boundary. `Coordinates` is a single
// (longitude, latitude) vertex, `LineStringGeometry` a way as delivered by the
// boundary source, `RingGeometry` a closed way, and the polygon and multi types
// are what ends up in the emitted GeoJSON.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_polygon;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
