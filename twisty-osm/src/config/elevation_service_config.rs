use crate::model::elevation::OpenElevationService;
use serde::{Deserialize, Serialize};
use twisty_core::model::TwistyError;

/// settings for an Open-Elevation compatible lookup endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationServiceConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// maximum number of points sent in a single lookup request
    pub batch_size: usize,
}

impl ElevationServiceConfig {
    pub const DEFAULT_URL: &'static str = "https://api.open-elevation.com/api/v1/lookup";

    pub fn build(&self) -> Result<OpenElevationService, TwistyError> {
        OpenElevationService::new(&self.url, self.timeout_secs, self.batch_size)
    }
}

impl Default for ElevationServiceConfig {
    fn default() -> Self {
        Self {
            url: String::from(Self::DEFAULT_URL),
            timeout_secs: 10,
            batch_size: 100,
        }
    }
}
