use crate::Coordinates;

/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximates the area of a ring on the sphere in km².
///
/// For every edge `(i, j = i + 1 mod n)` the term
/// `(lon_j - lon_i) * (2 + sin(lat_i) + sin(lat_j))` is accumulated in radians,
/// the result is `|sum| * R² / 2`. Good for wards, districts and provinces, not
/// geodesically exact for continent sized shapes.
///
/// The ring does not need to be closed. Fewer than 3 vertices give `0`.
pub fn calculate_polygon_area(ring: &[Coordinates]) -> f64 {
	let n = ring.len();
	if n < 3 {
		return 0.0;
	}

	let mut sum = 0.0;
	for i in 0..n {
		let p1 = &ring[i];
		let p2 = &ring[(i + 1) % n];
		sum += (p2.lon().to_radians() - p1.lon().to_radians())
			* (2.0 + p1.lat().to_radians().sin() + p2.lat().to_radians().sin());
	}

	sum.abs() * EARTH_RADIUS_KM * EARTH_RADIUS_KM / 2.0
}

/// Rounds for display, e.g. `round_to(12.3456, 2) == 12.35`.
pub fn round_to(value: f64, decimals: u8) -> f64 {
	let factor = 10f64.powi(i32::from(decimals));
	(value * factor).round() / factor
}
