use crate::model::Point;
use std::f64::consts::PI;

/// earth radius used by the haversine distance. every surface that scores roads
/// must use this same value.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// haversine great-circle distance between two points, in meters.
pub fn distance(a: &Point, b: &Point) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// sum of the distances between consecutive points, in meters. 0 for fewer than 2 points.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// heading of a->b as atan2(dlat, dlon) on raw degrees. this is a planar
/// approximation and not a geodesic bearing; it is kept as-is so the same roads
/// qualify as curvy on every surface.
fn planar_heading(a: &Point, b: &Point) -> f64 {
    (b.lat - a.lat).atan2(b.lon - a.lon)
}

/// change in heading at `curr` when travelling prev -> curr -> next, in radians within [0, pi].
pub fn turn_angle(prev: &Point, curr: &Point, next: &Point) -> f64 {
    let angle = (planar_heading(curr, next) - planar_heading(prev, curr)).abs();
    if angle > PI {
        2.0 * PI - angle
    } else {
        angle
    }
}
