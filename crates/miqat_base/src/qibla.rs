//! Qibla direction: initial great-circle bearing to the Kaaba.
//!
//! Spherical Earth model. With observer `(φ, λ)` and Kaaba `(φk, λk)`:
//!
//! `bearing = atan2(sin(λk − λ), cos φ · tan φk − sin φ · cos(λk − λ))`
//!
//! measured clockwise from true north and normalized to [0, 360).

use crate::prayer_types::GeoLocation;
use crate::util::{angular_distance_deg, normalize_360};

/// The Kaaba in Makkah.
pub const KAABA: GeoLocation = GeoLocation::new(21.4225, 39.8262, 0.0);

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Heading tolerance for "facing the Qibla", in degrees.
pub const FACING_TOLERANCE_DEG: f64 = 5.0;

/// Below this magnitude both atan2 arguments are treated as zero.
const DEGENERATE_EPS: f64 = 1e-12;

/// Bearing returned where the direction is undefined (at the Kaaba or its
/// antipode).
pub const UNDEFINED_BEARING_DEG: f64 = 0.0;

/// Qibla bearing in degrees clockwise from true north, in [0, 360).
///
/// Depends only on latitude and longitude. Returns
/// [`UNDEFINED_BEARING_DEG`] where every direction is equivalent; NaN input
/// propagates as NaN.
pub fn qibla_direction(latitude_deg: f64, longitude_deg: f64) -> f64 {
    let phi_k = KAABA.latitude_rad();
    let lambda_k = KAABA.longitude_rad();
    let phi = latitude_deg.to_radians();
    let lambda = longitude_deg.to_radians();

    let dlon = lambda_k - lambda;
    let y = dlon.sin();
    let x = phi.cos() * phi_k.tan() - phi.sin() * dlon.cos();

    if y.abs() < DEGENERATE_EPS && x.abs() < DEGENERATE_EPS {
        return UNDEFINED_BEARING_DEG;
    }
    normalize_360(y.atan2(x).to_degrees())
}

/// Qibla bearing for a location. Altitude is ignored.
pub fn qibla_for(location: &GeoLocation) -> f64 {
    qibla_direction(location.latitude_deg, location.longitude_deg)
}

/// Great-circle (haversine) distance to the Kaaba in kilometers.
pub fn qibla_distance_km(latitude_deg: f64, longitude_deg: f64) -> f64 {
    let phi1 = latitude_deg.to_radians();
    let phi2 = KAABA.latitude_rad();
    let dphi = phi2 - phi1;
    let dlambda = KAABA.longitude_rad() - longitude_deg.to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a bearing.
pub fn compass_point(bearing_deg: f64) -> &'static str {
    let sector = (normalize_360(bearing_deg) / 22.5).round() as usize % 16;
    COMPASS_POINTS[sector]
}

/// Whether a device heading points at the Qibla within `tolerance_deg`.
///
/// Compares the shortest angular distance, so headings either side of
/// north are handled.
pub fn is_facing_qibla(heading_deg: f64, qibla_deg: f64, tolerance_deg: f64) -> bool {
    angular_distance_deg(heading_deg, qibla_deg) < tolerance_deg
}
