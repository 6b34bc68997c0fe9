use crate::model::{feature::Highway, Point, TwistyError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// a radius search around a point for ways of the given highway classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WayQuery {
    pub center: Point,
    pub radius_m: f64,
    pub highway_classes: Vec<Highway>,
}

impl WayQuery {
    pub fn new(center: Point, radius_m: f64, highway_classes: Vec<Highway>) -> WayQuery {
        WayQuery {
            center,
            radius_m,
            highway_classes,
        }
    }

    /// the highway classes as an alternation filter, e.g. "motorway|primary|secondary"
    pub fn highway_filter(&self) -> String {
        self.highway_classes.iter().join("|")
    }

    pub fn validate(&self) -> Result<(), TwistyError> {
        if !self.center.is_valid() || self.center.lat.abs() > 90.0 || self.center.lon.abs() > 180.0
        {
            return Err(TwistyError::ConfigurationError(format!(
                "query center {} is not a valid WGS84 coordinate",
                self.center
            )));
        }
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(TwistyError::ConfigurationError(format!(
                "query radius must be positive, found {}",
                self.radius_m
            )));
        }
        if self.highway_classes.is_empty() {
            return Err(TwistyError::ConfigurationError(String::from(
                "query must include at least one highway class",
            )));
        }
        Ok(())
    }
}
