use crate::{
    algorithm::assembly::AssemblyStrategy,
    model::{feature::Highway, TwistyError},
};
use serde::{Deserialize, Serialize};

/// thresholds used to decide whether a way is long and curvy enough to report.
/// the defaults are shared by every surface that runs the engine and should not
/// drift between them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvatureThresholds {
    /// ways shorter than this are rejected
    pub min_length_m: f64,
    /// ways below this twistiness are rejected unless they have min_corner_count corners
    pub min_twistiness: f64,
    pub min_corner_count: u32,
    /// a single turn sharper than this counts as a corner (~5 degrees)
    pub corner_angle_rad: f64,
    /// urban ways must exceed this twistiness to be reported
    pub urban_min_twistiness: f64,
    /// ways with a posted maxspeed at or below this value are urban
    pub urban_max_speed_kph: f64,
    /// highway classes that are always urban
    pub urban_highway_classes: Vec<Highway>,
}

impl Default for CurvatureThresholds {
    fn default() -> Self {
        Self {
            min_length_m: 2000.0,
            min_twistiness: 0.0025,
            min_corner_count: 1,
            corner_angle_rad: 0.087,
            urban_min_twistiness: 0.007,
            urban_max_speed_kph: 50.0,
            urban_highway_classes: Highway::URBAN_CLASSES.to_vec(),
        }
    }
}

/// defines behaviors for a road search
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: CurvatureThresholds,
    /// maximum endpoint gap, in meters, treated as the same road continuing
    pub connection_threshold_m: f64,
    pub assembly_strategy: AssemblyStrategy,
    /// run elevation lookups for different roads concurrently
    pub parallelize: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: CurvatureThresholds::default(),
            connection_threshold_m: 50.0,
            assembly_strategy: AssemblyStrategy::default(),
            parallelize: true,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), TwistyError> {
        let t = &self.thresholds;
        let named = [
            ("min_length_m", t.min_length_m),
            ("min_twistiness", t.min_twistiness),
            ("corner_angle_rad", t.corner_angle_rad),
            ("urban_min_twistiness", t.urban_min_twistiness),
            ("urban_max_speed_kph", t.urban_max_speed_kph),
            ("connection_threshold_m", self.connection_threshold_m),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(TwistyError::ConfigurationError(format!(
                    "{name} must be a non-negative number, found {value}"
                )));
            }
        }
        if t.corner_angle_rad > std::f64::consts::PI {
            return Err(TwistyError::ConfigurationError(format!(
                "corner_angle_rad must not exceed pi, found {}",
                t.corner_angle_rad
            )));
        }
        Ok(())
    }
}
