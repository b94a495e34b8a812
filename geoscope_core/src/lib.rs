//! Shared plumbing for geoscope: configuration, the HTTP client used to talk to
//! Overpass and SPARQL endpoints, and the cancellation token passed through every fetch.

pub mod config;

pub mod io;

pub use tokio_util::sync::CancellationToken;
