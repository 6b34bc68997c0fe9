//! way builders for unit tests. coordinates are laid out from metric offsets near the
//! equator, where planar headings on raw degrees match compass bearings.

use crate::{
    algorithm::geometry::EARTH_RADIUS_M,
    model::{Point, Way},
};
use std::collections::BTreeMap;

pub fn meters_per_degree() -> f64 {
    EARTH_RADIUS_M * std::f64::consts::PI / 180.0
}

/// moves `meters` from `from` along a compass bearing (degrees clockwise from north).
pub fn offset(from: &Point, bearing_deg: f64, meters: f64) -> Point {
    let b = bearing_deg.to_radians();
    let mpd = meters_per_degree();
    let d_lat = meters * b.cos() / mpd;
    let d_lon = meters * b.sin() / (mpd * from.lat.to_radians().cos());
    Point::new(from.lat + d_lat, from.lon + d_lon)
}

/// a polyline starting at `start` following each (bearing, meters) leg in turn.
pub fn walk(start: Point, legs: &[(f64, f64)]) -> Vec<Point> {
    let mut points = vec![start];
    for (bearing, meters) in legs.iter() {
        let last = points[points.len() - 1];
        points.push(offset(&last, *bearing, *meters));
    }
    points
}

/// `n_points` evenly spaced collinear points covering `total_m` along a bearing.
pub fn straight(start: Point, bearing_deg: f64, total_m: f64, n_points: usize) -> Vec<Point> {
    let leg = total_m / (n_points - 1) as f64;
    let legs = vec![(bearing_deg, leg); n_points - 1];
    walk(start, &legs)
}

/// a northbound zig-zag of `n_legs` legs of `leg_m` meters, turning `turn_deg`
/// at every interior point.
pub fn zigzag(start: Point, turn_deg: f64, leg_m: f64, n_legs: usize) -> Vec<Point> {
    let legs = (0..n_legs)
        .map(|i| {
            let bearing = if i % 2 == 0 { turn_deg / 2.0 } else { -turn_deg / 2.0 };
            (bearing, leg_m)
        })
        .collect::<Vec<_>>();
    walk(start, &legs)
}

pub fn way(id: &str, name: Option<&str>, geometry: Vec<Point>) -> Way {
    Way::new(id, name.map(String::from), BTreeMap::new(), geometry)
}

pub fn way_with_tags(id: &str, tags: &[(&str, &str)], geometry: Vec<Point>) -> Way {
    let tags = tags
        .iter()
        .map(|(k, v)| (String::from(*k), String::from(*v)))
        .collect();
    Way::new(id, None, tags, geometry)
}
