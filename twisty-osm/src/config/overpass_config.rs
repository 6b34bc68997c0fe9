use crate::model::overpass::FilterQuery;
use serde::{Deserialize, Serialize};
use twisty_core::model::feature::Highway;

/// connection and filtering settings for the Overpass API way source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverpassConfig {
    pub url: String,
    /// server-side query timeout
    pub timeout_secs: u64,
    /// highway classes requested when the command line does not name any
    pub highway_classes: Vec<Highway>,
    /// additional tag filters appended to every way query, such as `["access"!="private"]`
    pub extra_filters: Vec<FilterQuery>,
}

impl OverpassConfig {
    pub const DEFAULT_URL: &'static str = "https://overpass-api.de/api/interpreter";
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: String::from(Self::DEFAULT_URL),
            timeout_secs: 25,
            highway_classes: Highway::DEFAULT_SEARCH_CLASSES.to_vec(),
            extra_filters: vec![],
        }
    }
}
