//! Geographic coordinate type and the great-circle distance heuristic.
//!
//! Distances are in kilometres (Earth radius 6371.0), the same unit road
//! `distance` values are expected to use when the great-circle estimate
//! drives A*.

/// Mean Earth radius in distance units (kilometres).
pub const EARTH_RADIUS: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance(self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi * 0.5).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);

        // Rounding can push `a` a hair above 1 for antipodal points.
        2.0 * EARTH_RADIUS * a.sqrt().min(1.0).asin()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Great-circle distance between two optional positions.
///
/// Returns `0.0` when either side has no coordinates.  A zero estimate is
/// trivially admissible, so A* over unpositioned locations degrades to
/// uniform-cost behaviour instead of failing.
#[inline]
pub fn great_circle_distance(a: Option<GeoPoint>, b: Option<GeoPoint>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => a.distance(b),
        _ => 0.0,
    }
}
