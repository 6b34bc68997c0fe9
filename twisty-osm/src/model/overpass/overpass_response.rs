use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use twisty_core::model::{deserialize_way_id, Point, TwistyError, Way};

/// body of an Overpass API JSON response. only elements of type "way" carry road geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
    /// set by the server when the query did not run to completion, e.g. on a timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(deserialize_with = "deserialize_way_id")]
    pub id: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// `out geom` writes null for nodes it could not resolve
    #[serde(default)]
    pub geometry: Vec<Option<Point>>,
}

impl OverpassResponse {
    pub const WAY_ELEMENT_TYPE: &'static str = "way";

    /// converts the way elements into engine input. ways with unresolved nodes are
    /// skipped, since joining the nodes on either side of a gap would invent a
    /// segment that is not on the road.
    pub fn into_ways(self) -> Vec<Way> {
        if let Some(remark) = &self.remark {
            log::warn!("overpass response remark: {remark}");
        }
        self.elements
            .into_iter()
            .filter(|e| e.element_type == Self::WAY_ELEMENT_TYPE)
            .filter_map(|e| match Way::try_from(e) {
                Ok(way) => Some(way),
                Err(e) => {
                    log::warn!("{e}");
                    None
                }
            })
            .collect_vec()
    }
}

impl TryFrom<OverpassElement> for Way {
    type Error = TwistyError;

    fn try_from(value: OverpassElement) -> Result<Self, Self::Error> {
        let n_unresolved = value.geometry.iter().filter(|p| p.is_none()).count();
        if n_unresolved > 0 {
            return Err(TwistyError::WaySourceError(format!(
                "skipping way {} with {} unresolved geometry nodes",
                value.id, n_unresolved
            )));
        }
        let geometry = value.geometry.into_iter().flatten().collect_vec();
        let name = value.tags.get(Way::NAME_TAG).cloned();
        Ok(Way::new(value.id, name, value.tags, geometry))
    }
}
