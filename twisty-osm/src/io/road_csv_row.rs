use geo::{Coord, LineString};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use twisty_core::model::{ConnectedRoad, Way};
use wkt::ToWkt;

/// flattened representation of a [`ConnectedRoad`] for tabular output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadCsvRow {
    pub id: String,
    pub name: String,
    pub highway: Option<String>,
    pub twistiness: f64,
    pub corner_count: u32,
    pub length_m: f64,
    pub is_connected: bool,
    /// source way ids in stitching order
    pub way_ids: String,
    pub elevation_gain_m: Option<f64>,
    pub elevation_loss_m: Option<f64>,
    pub max_elevation_m: Option<f64>,
    pub min_elevation_m: Option<f64>,
    /// WKT LINESTRING in lon/lat order
    pub geometry: String,
}

impl RoadCsvRow {
    /// a delimiter for aggregated fields which does not collide with CSV delimiters
    pub const VALUE_DELIMITER: &'static str = ";";
}

impl From<&ConnectedRoad> for RoadCsvRow {
    fn from(road: &ConnectedRoad) -> Self {
        let linestring: LineString<f64> = road
            .geometry
            .iter()
            .map(|p| Coord { x: p.lon, y: p.lat })
            .collect();
        let elevation = road.elevation.unwrap_or_default();
        RoadCsvRow {
            id: road.id.clone(),
            name: road.name.clone(),
            highway: road.tags.get(Way::HIGHWAY_TAG).cloned(),
            twistiness: road.twistiness,
            corner_count: road.corner_count,
            length_m: road.length_m,
            is_connected: road.is_connected,
            way_ids: road.way_ids.iter().join(Self::VALUE_DELIMITER),
            elevation_gain_m: elevation.elevation_gain_m,
            elevation_loss_m: elevation.elevation_loss_m,
            max_elevation_m: elevation.max_elevation_m,
            min_elevation_m: elevation.min_elevation_m,
            geometry: linestring.to_wkt().to_string(),
        }
    }
}
