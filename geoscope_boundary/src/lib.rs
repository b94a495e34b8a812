//! Boundary reconstruction: fetches OpenStreetMap relations from an Overpass endpoint,
//! stitches their ways into polygons and enriches them with population and area statistics.
//!
//! * [`resolver::BoundaryResolver`] resolves one relation into a polygon with statistics.
//! * [`outline::OutlineResolver`] finds the best available outline for a Wikidata entity.
//! * [`statistics`] fetches population and official area for a relation.

pub mod outline;
pub mod overpass;
pub mod resolver;
pub mod statistics;
