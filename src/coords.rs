pub trait Coords {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

impl Coords for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }

    fn lon(&self) -> f64 {
        self.1
    }
}

/// Computes the initial great-circle bearing from `from` to `to`.
///
/// Both coordinates are (latitude, longitude) in decimal degrees; the result
/// is in degrees, normalized to [0, 360). Input ranges are not validated.
///
/// Coincident endpoints have no meaningful bearing. atan2(0, 0) is
/// implementation-defined, so we pin that case to 0.0 explicitly.
///
/// # Examples
/// ```
/// use arrowmap::coords::initial_bearing;
/// assert!((initial_bearing(&(0.0, 0.0), &(0.0, 90.0)) - 90.0).abs() < 1e-9);
/// assert!(initial_bearing(&(0.0, 0.0), &(90.0, 0.0)).abs() < 1e-9);
/// assert_eq!(initial_bearing(&(40.783435, -73.96625), &(40.783435, -73.96625)), 0.0);
/// ```
pub fn initial_bearing<C: Coords>(from: &C, to: &C) -> f64 {
    let lon_diff = (to.lon() - from.lon()).to_radians();
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();

    let x = lon_diff.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * lon_diff.cos();

    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    normalize_degrees(x.atan2(y).to_degrees())
}

/// Maps an angle in degrees into [0, 360). Idempotent for angles already
/// in that interval.
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
