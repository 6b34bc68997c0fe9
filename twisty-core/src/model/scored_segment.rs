use super::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// a way (or a run of stitched ways) that passed curvature screening, along
/// with its curvature measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSegment {
    pub id: String,
    pub name: String,
    pub geometry: Vec<Point>,
    pub tags: BTreeMap<String, String>,
    /// accumulated turn angle per meter of travel, in radians per meter
    pub twistiness: f64,
    pub corner_count: u32,
    pub length_m: f64,
    /// source way ids in stitching order. a single entry for an unmerged way.
    pub way_ids: Vec<String>,
}

impl ScoredSegment {
    pub const DEFAULT_NAME: &'static str = "Unnamed Road";
    pub const ID_SEPARATOR: &'static str = "_";

    /// true when this segment carries the placeholder name, i.e. the source way had none.
    pub fn has_default_name(&self) -> bool {
        self.name.is_empty() || self.name == Self::DEFAULT_NAME
    }

    pub fn start(&self) -> Option<&Point> {
        self.geometry.first()
    }

    pub fn end(&self) -> Option<&Point> {
        self.geometry.last()
    }
}
