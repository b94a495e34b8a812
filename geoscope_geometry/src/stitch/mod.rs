//! Reassembles boundary rings from the unordered, possibly reversed ways of a relation.
//!
//! Ways are joined greedily: the chain starts with the first way, then the first unused
//! way whose start or end matches the chain's tail is appended (reversed if it matched
//! with its end). When a full pass over the unused ways finds no match, stitching stops
//! and whatever was assembled so far is returned. Ways that are not reachable from the
//! first way are dropped; the boundary source delivers broken relations often enough
//! that a partial ring is more useful than an error.
//!
//! [`close_ring`] turns such a chain into a ring by repeating its first vertex if needed.

use crate::{CompositeGeometryTrait, Coordinates, LineStringGeometry, RingGeometry};
use geoscope_core::config::{DEFAULT_TOLERANCE, StitchConfig};

/// Joins ways end to end with a fixed endpoint tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WayStitcher {
	tolerance: f64,
}

impl Default for WayStitcher {
	fn default() -> Self {
		Self::new(DEFAULT_TOLERANCE)
	}
}

impl From<&StitchConfig> for WayStitcher {
	fn from(config: &StitchConfig) -> Self {
		Self::new(config.tolerance)
	}
}

impl WayStitcher {
	pub fn new(tolerance: f64) -> Self {
		Self { tolerance }
	}

	/// Joins `segments` into one continuous chain, starting with `segments[0]`.
	///
	/// A single segment is returned unchanged, an empty input gives an empty chain.
	/// The result may be open; see [`close_ring`].
	pub fn connect_ways(&self, segments: &[LineStringGeometry]) -> LineStringGeometry {
		let mut used = vec![false; segments.len()];
		let chain = self.connect_from(segments, &mut used, 0);

		let unused = used.iter().filter(|u| !**u).count();
		if unused > 0 {
			log::debug!(
				"stitching stopped with {unused} of {} ways not connected to the chain",
				segments.len()
			);
		}
		chain
	}

	/// Collects every disjoint chain: after one chain gets stuck, a new one is seeded
	/// with the first unused segment. Each chain is closed with [`close_ring`].
	///
	/// Chains with fewer than 4 vertices after closing cannot form a ring and are skipped.
	pub fn stitch_rings(&self, segments: &[LineStringGeometry]) -> Vec<RingGeometry> {
		self
			.stitch_chains(segments)
			.into_iter()
			.map(close_ring)
			.filter(|ring| ring.verify().is_ok())
			.collect()
	}

	/// Like [`WayStitcher::stitch_rings`], but returns the chains as assembled, without closing them.
	pub fn stitch_chains(&self, segments: &[LineStringGeometry]) -> Vec<LineStringGeometry> {
		let mut used = vec![false; segments.len()];
		let mut chains = Vec::new();
		while let Some(seed) = used.iter().position(|u| !*u) {
			let chain = self.connect_from(segments, &mut used, seed);
			if !chain.is_empty() {
				chains.push(chain);
			}
		}
		chains
	}

	fn connect_from(&self, segments: &[LineStringGeometry], used: &mut [bool], seed: usize) -> LineStringGeometry {
		let Some(first) = segments.get(seed) else {
			return LineStringGeometry::new();
		};

		let mut chain: Vec<Coordinates> = first.0.clone();
		used[seed] = true;

		loop {
			let Some(tail) = chain.last().copied() else {
				break;
			};

			let mut progress = false;
			for (index, segment) in segments.iter().enumerate() {
				if used[index] {
					continue;
				}
				let (Some(start), Some(end)) = (segment.0.first(), segment.0.last()) else {
					// an empty way can never connect, but it must not block termination
					used[index] = true;
					continue;
				};

				if tail.matches(start, self.tolerance) {
					chain.extend(segment.0.iter().skip(1));
				} else if tail.matches(end, self.tolerance) {
					chain.extend(segment.0.iter().rev().skip(1));
				} else {
					continue;
				}

				used[index] = true;
				progress = true;
				break;
			}

			if !progress {
				break;
			}
		}

		LineStringGeometry(chain)
	}
}

/// Joins `segments` with the default tolerance of 0.0001°.
pub fn connect_ways(segments: &[LineStringGeometry]) -> LineStringGeometry {
	WayStitcher::default().connect_ways(segments)
}

/// Closes a chain into a ring by appending its first vertex, unless first and last
/// vertex are already identical. An empty chain gives an empty ring.
pub fn close_ring(chain: LineStringGeometry) -> RingGeometry {
	let mut coords = chain.0;
	if let (Some(first), Some(last)) = (coords.first().copied(), coords.last().copied()) {
		if first != last {
			coords.push(first);
		}
	}
	RingGeometry(coords)
}
