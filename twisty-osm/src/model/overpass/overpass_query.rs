use super::FilterQuery;
use itertools::Itertools;
use std::fmt::Display;
use twisty_core::model::{source::WayQuery, Point};

/// an Overpass QL request for every way matching a set of tag filters within a
/// radius of a point, returned as JSON with inline geometry.
/// see <https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL>
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassQuery {
    pub filters: Vec<FilterQuery>,
    pub center: Point,
    pub radius_m: f64,
    pub timeout_secs: u64,
}

impl OverpassQuery {
    pub fn new(
        query: &WayQuery,
        extra_filters: &[FilterQuery],
        timeout_secs: u64,
    ) -> OverpassQuery {
        let mut filters = vec![FilterQuery::highway_classes(&query.highway_classes)];
        filters.extend(extra_filters.iter().cloned());
        OverpassQuery {
            filters,
            center: query.center,
            radius_m: query.radius_m,
            timeout_secs,
        }
    }
}

impl Display for OverpassQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[out:json][timeout:{}];way{}(around:{},{},{});out geom;",
            self.timeout_secs,
            self.filters.iter().join(""),
            self.radius_m,
            self.center.lat,
            self.center.lon
        )
    }
}
