use super::{ElevationStats, Point, ScoredSegment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// a final road produced by the assembler. serializes to the JSON shape expected by
/// clients: lengths in meters, twistiness in radians per meter, and elevation fields
/// inlined only when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedRoad {
    pub id: String,
    pub name: String,
    pub geometry: Vec<Point>,
    pub tags: BTreeMap<String, String>,
    pub twistiness: f64,
    pub corner_count: u32,
    pub length_m: f64,
    pub is_connected: bool,
    #[serde(default, skip_serializing)]
    pub way_ids: Vec<String>,
    #[serde(flatten)]
    pub elevation: Option<ElevationStats>,
}

impl ConnectedRoad {
    pub fn with_elevation(mut self, elevation: Option<ElevationStats>) -> ConnectedRoad {
        self.elevation = elevation.filter(|e| !e.is_empty());
        self
    }
}

impl From<ScoredSegment> for ConnectedRoad {
    fn from(value: ScoredSegment) -> Self {
        ConnectedRoad {
            is_connected: value.way_ids.len() > 1,
            id: value.id,
            name: value.name,
            geometry: value.geometry,
            tags: value.tags,
            twistiness: value.twistiness,
            corner_count: value.corner_count,
            length_m: value.length_m,
            way_ids: value.way_ids,
            elevation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectedRoad;
    use crate::model::{ElevationStats, Point};
    use std::collections::BTreeMap;

    fn road() -> ConnectedRoad {
        ConnectedRoad {
            id: String::from("1_2"),
            name: String::from("Oak St"),
            geometry: vec![Point::new(0.0, 0.0), Point::new(0.01, 0.0)],
            tags: BTreeMap::from([(String::from("highway"), String::from("secondary"))]),
            twistiness: 0.004,
            corner_count: 3,
            length_m: 1111.9,
            is_connected: true,
            way_ids: vec![String::from("1"), String::from("2")],
            elevation: None,
        }
    }

    #[test]
    fn serialize_without_elevation() {
        let value = serde_json::to_value(road()).expect("serializable");
        let obj = value.as_object().expect("road serializes to an object");
        for key in [
            "id",
            "name",
            "geometry",
            "tags",
            "twistiness",
            "corner_count",
            "length_m",
            "is_connected",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(!obj.contains_key("elevation_gain_m"));
        assert!(!obj.contains_key("way_ids"));
        assert_eq!(obj["geometry"][1]["lat"], 0.01);
    }

    #[test]
    fn serialize_with_elevation() {
        let stats = ElevationStats::from_profile(&[10.0, 20.0]);
        let value = serde_json::to_value(road().with_elevation(stats)).expect("serializable");
        assert_eq!(value["elevation_gain_m"], 10.0);
        assert_eq!(value["elevation_loss_m"], 0.0);
        assert_eq!(value["max_elevation_m"], 20.0);
        assert_eq!(value["min_elevation_m"], 10.0);
    }
}
