use super::{ElevationServiceConfig, OverpassConfig};
use crate::model::TwistyCliError;
use serde::{Deserialize, Serialize};
use twisty_core::EngineConfig;

/// defines behaviors for a twisty road search run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwistyConfiguration {
    pub engine: EngineConfig,
    pub overpass: OverpassConfig,
    /// when present, roads are annotated with elevation statistics
    pub elevation: Option<ElevationServiceConfig>,
    /// replace existing output files
    pub overwrite: bool,
}

impl TryFrom<&String> for TwistyConfiguration {
    type Error = TwistyCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: TwistyConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TwistyCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TwistyCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TwistyCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TwistyCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(TwistyCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.engine.validate()?;
        Ok(conf)
    }
}
