//! Access to OpenStreetMap boundary data through the Overpass API.

#[cfg(test)]
pub(crate) mod mock;
pub mod query;
mod response;
mod source;

pub use response::*;
pub use source::*;
