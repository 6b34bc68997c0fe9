use super::Point;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// a raw polyline road segment from the external map-data source.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    #[serde(deserialize_with = "deserialize_way_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub geometry: Vec<Point>,
}

impl Way {
    pub const HIGHWAY_TAG: &'static str = "highway";
    pub const MAXSPEED_TAG: &'static str = "maxspeed";
    pub const NAME_TAG: &'static str = "name";

    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        tags: BTreeMap<String, String>,
        geometry: Vec<Point>,
    ) -> Way {
        Way {
            id: id.into(),
            name,
            tags,
            geometry,
        }
    }

    /// a way is usable when it has at least two points and every point is finite.
    pub fn has_valid_geometry(&self) -> bool {
        self.geometry.len() >= 2 && self.geometry.iter().all(|p| p.is_valid())
    }

    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.trim())
    }

    /// the name of this way, falling back to the OSM "name" tag. blank names count as absent.
    pub fn road_name(&self) -> Option<&str> {
        let non_blank = |n: &&str| !n.trim().is_empty();
        self.name
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.get_tag(Self::NAME_TAG).filter(non_blank))
            .map(str::trim)
    }
}

/// way sources disagree on whether identifiers are numbers or strings. both are
/// accepted and stored as strings.
pub fn deserialize_way_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct WayIdVisitor;

    impl de::Visitor<'_> for WayIdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a way identifier as an integer or string")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::from(v))
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }
    }

    d.deserialize_any(WayIdVisitor)
}

#[cfg(test)]
mod tests {
    use super::Way;

    #[test]
    fn deserialize_numeric_id() {
        let json = r#"{"id": 123456, "geometry": [{"lat": 1.0, "lon": 2.0}]}"#;
        match serde_json::from_str::<Way>(json) {
            Ok(way) => {
                assert_eq!(way.id, "123456");
                assert_eq!(way.name, None);
                assert!(way.tags.is_empty());
                assert!(!way.has_valid_geometry());
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn deserialize_string_id_with_name() {
        let json = r#"{
            "id": "w42",
            "name": "Oak St",
            "tags": {"highway": "secondary"},
            "geometry": [{"lat": 1.0, "lon": 2.0}, {"lat": 1.1, "lon": 2.1}]
        }"#;
        match serde_json::from_str::<Way>(json) {
            Ok(way) => {
                assert_eq!(way.id, "w42");
                assert_eq!(way.road_name(), Some("Oak St"));
                assert_eq!(way.get_tag("highway"), Some("secondary"));
                assert!(way.has_valid_geometry());
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn road_name_falls_back_to_tag() {
        let json = r#"{"id": 1, "name": "  ", "tags": {"name": "Ridge Rd"}}"#;
        let way: Way = serde_json::from_str(json).expect("test invariant: valid json");
        assert_eq!(way.road_name(), Some("Ridge Rd"));
    }
}
