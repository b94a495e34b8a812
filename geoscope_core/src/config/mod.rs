mod http;
mod main;
mod overpass;
mod statistics;
mod stitch;

pub use http::{HttpConfig, MAX_RETRIES_LIMIT};
pub use main::Config;
pub use overpass::{DEFAULT_OVERPASS_URL, OverpassConfig};
pub use statistics::{DEFAULT_STATISTICS_URL, StatisticsConfig};
pub use stitch::{DEFAULT_TOLERANCE, StitchConfig};
