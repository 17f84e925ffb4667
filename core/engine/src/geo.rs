//! FILENAME: core/engine/src/geo.rs
//! PURPOSE: Derive pole tilt angles from the coordinates of a pole line.
//! CONTEXT: The deflection at an interior pole is the smaller difference
//! between the bearing from the previous pole and the bearing to the next
//! pole. Endpoints have no deflection.

use crate::classifier::parse_lenient;

/// (latitude, longitude) in decimal degrees.
pub type LatLon = (f64, f64);

/// Initial great-circle bearing from `from` to `to`, in [0, 360).
pub fn bearing(from: LatLon, to: LatLon) -> f64 {
    let (lat1, lon1) = (from.0.to_radians(), from.1);
    let (lat2, lon2) = (to.0.to_radians(), to.1);
    let delta_lon = (lon2 - lon1).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Smaller angle between two bearings, in [0, 180].
pub fn angle_diff(b1: f64, b2: f64) -> f64 {
    let diff = (b1 - b2).abs();
    diff.min(360.0 - diff)
}

/// Parse stored coordinate text. Missing or unparseable values give `None`.
pub fn parse_lat_lon(latitude: Option<&str>, longitude: Option<&str>) -> Option<LatLon> {
    let lat = parse_lenient(latitude?);
    let lon = parse_lenient(longitude?);
    if lat.is_nan() || lon.is_nan() {
        None
    } else {
        Some((lat, lon))
    }
}

/// Deflection angle for every point. `None` for endpoints and for points
/// where this point or either neighbour has no coordinates.
pub fn deflection_angles(points: &[Option<LatLon>]) -> Vec<Option<f64>> {
    let mut angles = vec![None; points.len()];
    if points.len() < 3 {
        return angles;
    }

    for i in 1..points.len() - 1 {
        if let (Some(prev), Some(here), Some(next)) = (points[i - 1], points[i], points[i + 1]) {
            let incoming = bearing(prev, here);
            let outgoing = bearing(here, next);
            angles[i] = Some(angle_diff(incoming, outgoing));
        }
    }

    angles
}
