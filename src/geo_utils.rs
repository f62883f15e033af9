//! # Geographic Utilities
//!
//! Great-circle distance for GPS containment matching.
//!
//! All coordinates are WGS84 latitude/longitude in degrees, the format
//! produced by GPS receivers and activity APIs. Distances are returned in
//! kilometers.
//!
//! ## Algorithm Notes
//!
//! The haversine formula gives the great-circle distance between two points
//! on a sphere. The sphere radius used here is the WGS84 *equatorial* radius
//! (6378.137 km) rather than a mean radius (~6371 km), so every distance
//! carries a small systematic bias (under 0.3%) versus a mean-radius
//! haversine. Touch decisions depend on this exact constant, so it must not
//! be swapped for a different radius without re-deriving every tolerance
//! downstream.
//!
//! Reference: [Haversine formula (Wikipedia)](https://en.wikipedia.org/wiki/Haversine_formula)

use crate::GpsPoint;

/// Sphere radius used for all distance computation, in kilometers.
///
/// This is the WGS84 equatorial radius. See the module docs for why it is
/// not a mean radius.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Calculate the great-circle distance between two GPS points in kilometers.
///
/// Always returns a finite, non-negative number for finite inputs. The
/// haversine term is clamped to `[0, 1]` before the inverse sine: floating
/// rounding can push it fractionally past 1.0 for coincident or antipodal
/// points, and the clamp keeps `asin` inside its domain there.
///
/// # Example
///
/// ```rust
/// use waypoint_matcher::{GpsPoint, geo_utils};
///
/// let london = GpsPoint::new(51.5074, -0.1278);
/// let paris = GpsPoint::new(48.8566, 2.3522);
///
/// let distance = geo_utils::haversine_km(&london, &paris);
/// assert!((distance - 343.9).abs() < 1.0); // ~344 km
/// ```
#[inline]
pub fn haversine_km(p1: &GpsPoint, p2: &GpsPoint) -> f64 {
    let dlat = (p2.latitude - p1.latitude).to_radians();
    let dlon = (p2.longitude - p1.longitude).to_radians();
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

// =============================================================================
// Unit Tests
// =============================================================================
