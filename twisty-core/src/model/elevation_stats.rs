use serde::{Deserialize, Serialize};

/// elevation summary of a road. any field may be absent when the elevation
/// service could not supply data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_loss_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_elevation_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_elevation_m: Option<f64>,
}

impl ElevationStats {
    /// summarizes an elevation profile. gain and loss are sums of the positive and
    /// negative consecutive deltas (loss is reported as a positive magnitude).
    /// non-finite samples are skipped. returns None when no finite sample remains.
    pub fn from_profile(elevations: &[f64]) -> Option<ElevationStats> {
        let samples: Vec<f64> = elevations.iter().copied().filter(|e| e.is_finite()).collect();
        let first = *samples.first()?;

        let mut gain = 0.0;
        let mut loss = 0.0;
        let mut max = first;
        let mut min = first;
        for (prev, next) in samples.iter().zip(samples.iter().skip(1)) {
            let delta = next - prev;
            if delta > 0.0 {
                gain += delta;
            } else {
                loss -= delta;
            }
            max = max.max(*next);
            min = min.min(*next);
        }

        Some(ElevationStats {
            elevation_gain_m: Some(gain),
            elevation_loss_m: Some(loss),
            max_elevation_m: Some(max),
            min_elevation_m: Some(min),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.elevation_gain_m.is_none()
            && self.elevation_loss_m.is_none()
            && self.max_elevation_m.is_none()
            && self.min_elevation_m.is_none()
    }
}
