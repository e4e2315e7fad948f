//! Shared angle and clock normalization helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    wrap_into(deg, 360.0)
}

/// Normalize decimal hours to [0, 24).
pub fn normalize_24(hours: f64) -> f64 {
    wrap_into(hours, 24.0)
}

// `r + period` can round up to exactly `period` for tiny negative `r`.
fn wrap_into(x: f64, period: f64) -> f64 {
    let r = x % period;
    let r = if r < 0.0 { r + period } else { r };
    if r >= period { 0.0 } else { r }
}

/// Smallest absolute difference between two bearings, in [0, 180].
pub fn angular_distance_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}
